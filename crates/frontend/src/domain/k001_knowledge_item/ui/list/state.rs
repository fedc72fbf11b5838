use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct KnowledgeItemListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for KnowledgeItemListState {
    fn default() -> Self {
        Self {
            sort_field: "code".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<KnowledgeItemListState> {
    RwSignal::new(KnowledgeItemListState::default())
}
