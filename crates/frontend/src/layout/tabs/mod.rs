pub mod page;
pub mod registry;
pub mod tab_labels;

pub use tab_labels::{detail_tab_label, pick_identifier, tab_label_for_key};
