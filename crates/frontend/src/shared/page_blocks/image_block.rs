use super::block_styles::{height_class, inline_style};
use contracts::shared::content_block::ContentBlock;
use leptos::prelude::*;

/// Image section of a composed page.
///
/// A block without an image URL still renders its styled frame, so a
/// half-edited page keeps its layout.
#[component]
pub fn ImageBlock(block: ContentBlock) -> impl IntoView {
    let frame_class = format!("block-frame block-frame--image {}", height_class(block.styles.as_ref()));
    let style = inline_style(block.styles.as_ref());

    let image_url = block.content.image_url.clone();
    let alt = block.content.alt.clone().unwrap_or_default();

    view! {
        <section class=frame_class style=style>
            {image_url.map(|url| {
                view! { <img class="block-frame__image" src=url alt=alt /> }
            })}
        </section>
    }
}
