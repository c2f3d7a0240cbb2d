pub mod accessory;
pub mod aggregate;

pub use accessory::*;
pub use aggregate::*;
