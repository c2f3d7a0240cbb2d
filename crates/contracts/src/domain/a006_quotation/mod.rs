//! Quotation aggregate, its form model and the total calculator.

pub mod aggregate;
pub mod form;
pub mod totals;

pub use aggregate::*;
pub use form::*;
pub use totals::*;
