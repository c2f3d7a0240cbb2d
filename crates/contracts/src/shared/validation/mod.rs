//! Declarative form validation.
//!
//! Each form declares a static [`ValidationSchema`]; the schema is evaluated
//! against any type implementing [`FormFields`] and yields [`FieldErrors`],
//! keyed the same way the backend keys its 422 responses
//! (`customer_name`, `items.0.quantity`).

mod field_errors;
mod rules;
mod schema;

pub use field_errors::FieldErrors;
pub use rules::{FieldFormat, ValidationRules};
pub use schema::{FieldRule, FormFields, ValidationSchema};
