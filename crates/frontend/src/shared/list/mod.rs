pub mod controller;
pub mod state;
pub mod toolbar;

pub use controller::{use_list_controller, ListController};
pub use state::{ListState, SavedListQuery};
pub use toolbar::{ListHeader, ListToolbar};
