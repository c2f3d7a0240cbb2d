//! Shared types for the quotation admin dashboard.
//!
//! Everything here is target-independent: the frontend compiles it to wasm,
//! tests run it natively.

pub mod domain;
pub mod enums;
pub mod shared;
