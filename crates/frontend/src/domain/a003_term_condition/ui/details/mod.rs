mod view;
mod view_model;

pub use view::TermConditionDetails;
pub use view_model::TermConditionDetailsViewModel;
