use super::block_styles::height_class;
use super::resolve::resolve_recommendations;
use crate::shared::recommendations::RecommendedContentList;
use contracts::shared::content_block::ContentBlock;
use leptos::prelude::*;

/// Generic cross-domain recommendations section.
///
/// Not gated by site settings; an empty or legacy-shaped content map
/// falls back to the listing defaults.
#[component]
pub fn RecommendationsBlock(block: ContentBlock) -> impl IntoView {
    let frame_class = format!(
        "block-frame block-frame--listing {}",
        height_class(block.styles.as_ref())
    );
    let props = resolve_recommendations(&block.content);

    view! {
        <section class=frame_class>
            <RecommendedContentList
                title=props.title
                content_types=props.content_types
                limit=props.limit
                show_view_all=props.show_view_all
                exclude_ids=props.exclude_ids
            />
        </section>
    }
}
