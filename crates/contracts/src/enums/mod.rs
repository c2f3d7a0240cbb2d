pub mod customer_type;
pub mod island;

pub use customer_type::CustomerType;
pub use island::Island;
