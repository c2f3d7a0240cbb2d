//! Bank account create/edit form.
//!
//! - view_model.rs: form state, load and save commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::BankAccountDetails;
pub use view_model::BankAccountDetailsViewModel;
