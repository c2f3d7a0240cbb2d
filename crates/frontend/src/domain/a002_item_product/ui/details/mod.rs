//! Item product create/edit form with its specification rows.

mod view;
mod view_model;

pub use view::ItemProductDetails;
pub use view_model::ItemProductDetailsViewModel;
