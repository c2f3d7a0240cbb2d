//! Customer create/edit form.
//!
//! - view_model.rs: form state, contact person rows, load/save commands
//! - view.rs: Leptos components

mod view;
mod view_model;

pub use view::CustomerDetails;
pub use view_model::CustomerDetailsViewModel;
