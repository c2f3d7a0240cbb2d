//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod api_resource;
pub mod audit;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use api_resource::ApiResource;
pub use audit::AuditFields;
