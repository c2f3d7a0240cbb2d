pub mod api_utils;
pub mod async_select;
pub mod components;
pub mod config;
pub mod debounce;
pub mod form_status;
pub mod icons;
pub mod list;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
