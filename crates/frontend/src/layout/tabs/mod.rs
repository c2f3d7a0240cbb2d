//! Tab management:
//! - `page` - TabPage wrapper around the content of one tab
//! - `registry` - tab.key → view mapping
//! - `tab_labels` - tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, new_tab_label, tab_label_for_key};
