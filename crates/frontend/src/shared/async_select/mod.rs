//! Searchable, paginated dropdown backed by a list endpoint.

pub mod component;
pub mod entities;
pub mod hook;
pub mod state;

pub use component::AsyncSelect;
pub use entities::*;
pub use hook::{use_async_select, AsyncSelectHandle, Fetcher};
pub use state::AsyncSelectState;
