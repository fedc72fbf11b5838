use super::block_styles::height_class;
use super::resolve::{listing_gate, resolve_fixed_listing, ListingGate};
use crate::shared::recommendations::RecommendedContentList;
use crate::system::site_settings::context::use_site_settings;
use contracts::shared::content_block::ContentBlock;
use contracts::shared::recommendations::ContentType;
use leptos::prelude::*;

/// Knowledge-base section, gated on the `show_knowledge` site flag.
#[component]
pub fn KnowledgeItemsListBlock(block: ContentBlock) -> impl IntoView {
    let settings_ctx = use_site_settings();

    let frame_class = format!(
        "block-frame block-frame--listing {}",
        height_class(block.styles.as_ref())
    );
    let props = resolve_fixed_listing(
        &block.content,
        "Knowledge Base",
        &[ContentType::KnowledgeItem],
    );

    view! {
        <section class=frame_class>
            {move || {
                let settings = settings_ctx.settings.get();
                match listing_gate(settings.as_ref(), settings_ctx.is_loading.get(), |s| s.show_knowledge) {
                    ListingGate::Loading => view! {
                        <div class="block-frame__loading"></div>
                    }
                    .into_any(),
                    ListingGate::Disabled => view! {
                        <p class="block-frame__disabled">{"Knowledge base is currently unavailable"}</p>
                    }
                    .into_any(),
                    ListingGate::Enabled => {
                        let props = props.clone();
                        view! {
                            <RecommendedContentList
                                title=props.title
                                content_types=props.content_types
                                limit=props.limit
                                show_view_all=props.show_view_all
                                exclude_ids=props.exclude_ids
                            />
                        }
                        .into_any()
                    }
                }
            }}
        </section>
    }
}
