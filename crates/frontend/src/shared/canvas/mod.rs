pub mod tab_strip;
pub mod techniques;

pub use tab_strip::TechniqueTabStrip;
pub use techniques::{
    derive_tabs, find_business_model_canvas, find_element_by_type, find_user_story, technique_for,
    TechniqueConfig,
};
