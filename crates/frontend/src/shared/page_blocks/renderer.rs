//! Content block renderer - the single source of truth for
//! ContentBlock.kind → View.
//!
//! Each page section is one `ContentBlock`; this dispatch hands it to
//! the matching block component. Kinds this build does not know render
//! a neutral placeholder instead of breaking the page.

use super::events_list_block::EventsListBlock;
use super::image_block::ImageBlock;
use super::knowledge_items_block::KnowledgeItemsListBlock;
use super::recommendations_block::RecommendationsBlock;
use contracts::shared::content_block::{BlockKind, ContentBlock};
use leptos::prelude::*;

/// Renders one page block into a section view.
pub fn render_block(block: &ContentBlock) -> AnyView {
    let block = block.clone();
    match block.kind {
        BlockKind::Image => view! { <ImageBlock block=block /> }.into_any(),
        BlockKind::Recommendations => view! { <RecommendationsBlock block=block /> }.into_any(),
        BlockKind::EventsList => view! { <EventsListBlock block=block /> }.into_any(),
        BlockKind::KnowledgeItemsList => {
            view! { <KnowledgeItemsListBlock block=block /> }.into_any()
        }
        BlockKind::Unknown => {
            log::warn!("Unknown block kind, rendering placeholder");
            view! { <section class="block-frame block-frame--placeholder"></section> }.into_any()
        }
    }
}
