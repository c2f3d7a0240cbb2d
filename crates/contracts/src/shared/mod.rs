pub mod api_error;
pub mod money;
pub mod pagination;
pub mod serde_helpers;
pub mod validation;
