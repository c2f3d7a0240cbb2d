pub mod badge;
pub mod checkbox;
pub mod field;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, BadgeTone, StatusBadge};
pub use checkbox::Checkbox;
pub use field::FormField;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
