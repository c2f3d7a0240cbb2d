//! Quotation create/edit form.
//!
//! - view_model.rs: form state, lookup labels, item/accessory commands,
//!   totals and the draft/submit save command
//! - view.rs: Leptos components (header, items, totals)

mod view;
mod view_model;

pub use view::QuotationDetails;
pub use view_model::{HeaderField, QuotationDetailsViewModel};
