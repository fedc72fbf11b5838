//! Page editor: block list on the left, live preview on the right.
//!
//! Block mutations autosave after a short quiet period; metadata edits
//! (title, slug, published) save explicitly. The preview is rendered
//! through the same `render_block` dispatch the published site uses,
//! so what the editor shows is what readers get.

use crate::domain::k005_page::api::{fetch_page, upsert_page};
use crate::shared::icons::icon;
use crate::shared::page_blocks::render_block;
use contracts::domain::k005_page::PageDto;
use contracts::shared::content_block::{BlockKind, ContentBlock};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTOSAVE_QUIET_MS: u32 = 800;

fn kind_label(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Image => "Image",
        BlockKind::Recommendations => "Recommendations",
        BlockKind::EventsList => "Events list",
        BlockKind::KnowledgeItemsList => "Knowledge items",
        BlockKind::Unknown => "Unknown",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PageEditor(#[prop(optional_no_strip)] id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (slug, set_slug) = signal(String::new());
    let (published, set_published) = signal(false);
    let blocks = RwSignal::new(Vec::<ContentBlock>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (save_state, set_save_state) = signal::<Option<String>>(None);

    let page_id = RwSignal::new(id.clone());
    // Monotonic counter; an autosave only fires if no later edit
    // superseded it during the quiet period.
    let autosave_gen = StoredValue::new(0u32);

    if let Some(id) = id {
        spawn_local(async move {
            match fetch_page(&id).await {
                Ok(page) => {
                    set_title.set(page.base.description);
                    set_slug.set(page.slug);
                    set_published.set(page.published);
                    blocks.set(page.blocks);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    let build_dto = move || PageDto {
        id: page_id.get_untracked(),
        code: None,
        description: title.get_untracked(),
        slug: slug.get_untracked(),
        blocks: blocks.get_untracked(),
        published: published.get_untracked(),
        comment: None,
    };

    let save_now = move || {
        let dto = build_dto();
        spawn_local(async move {
            match upsert_page(dto).await {
                Ok(stored_id) => {
                    if page_id.get_untracked().is_none() && !stored_id.is_empty() {
                        page_id.set(Some(stored_id));
                    }
                    set_save_state.set(Some("Saved".to_string()));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Debounced autosave for block mutations on an already-stored page
    let schedule_autosave = move || {
        if page_id.get_untracked().is_none() {
            return;
        }
        let my_gen = autosave_gen.with_value(|g| g + 1);
        autosave_gen.set_value(my_gen);
        set_save_state.set(Some("…".to_string()));
        spawn_local(async move {
            TimeoutFuture::new(AUTOSAVE_QUIET_MS).await;
            if autosave_gen.get_value() == my_gen {
                save_now();
            }
        });
    };

    let add_block = move |kind: BlockKind| {
        blocks.update(|b| b.push(ContentBlock::new(kind)));
        schedule_autosave();
    };

    let remove_block = move |index: usize| {
        blocks.update(|b| {
            if index < b.len() {
                b.remove(index);
            }
        });
        schedule_autosave();
    };

    let move_block = move |index: usize, delta: i32| {
        blocks.update(|b| {
            let target = index as i32 + delta;
            if target >= 0 && (target as usize) < b.len() {
                b.swap(index, target as usize);
            }
        });
        schedule_autosave();
    };

    let set_block_title = move |index: usize, value: String| {
        blocks.update(|b| {
            if let Some(block) = b.get_mut(index) {
                block.content.title = Some(value).filter(|v| !v.is_empty());
            }
        });
        schedule_autosave();
    };

    let set_block_image_url = move |index: usize, value: String| {
        blocks.update(|b| {
            if let Some(block) = b.get_mut(index) {
                block.content.image_url = Some(value).filter(|v| !v.is_empty());
            }
        });
        schedule_autosave();
    };

    let set_block_limit = move |index: usize, value: String| {
        blocks.update(|b| {
            if let Some(block) = b.get_mut(index) {
                block.content.limit = value.parse::<u32>().ok();
            }
        });
        schedule_autosave();
    };

    view! {
        <div class="page-editor">
            <div class="header">
                <h2>{move || if page_id.get().is_some() { "Edit page" } else { "New page" }}</h2>
                <div class="header__actions">
                    <span class="page-editor__save-state">{move || save_state.get().unwrap_or_default()}</span>
                    <button class="button button--primary" on:click=move |_| save_now()>
                        {"Save"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        {"Close"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form form--inline">
                <div class="form__row">
                    <label class="form__label">{"Title"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Slug"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || slug.get()
                        on:input=move |ev| set_slug.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">
                        <input
                            type="checkbox"
                            prop:checked=move || published.get()
                            on:change=move |ev| set_published.set(event_target_checked(&ev))
                        />
                        {"Published"}
                    </label>
                </div>
            </div>

            <div class="page-editor__body">
                <div class="page-editor__blocks">
                    <div class="page-editor__toolbar">
                        <button class="button button--ghost button--small" on:click=move |_| add_block(BlockKind::Image)>
                            {icon("image")}
                            {"Image"}
                        </button>
                        <button class="button button--ghost button--small" on:click=move |_| add_block(BlockKind::Recommendations)>
                            {icon("list")}
                            {"Recommendations"}
                        </button>
                        <button class="button button--ghost button--small" on:click=move |_| add_block(BlockKind::EventsList)>
                            {icon("calendar")}
                            {"Events"}
                        </button>
                        <button class="button button--ghost button--small" on:click=move |_| add_block(BlockKind::KnowledgeItemsList)>
                            {icon("book-open")}
                            {"Knowledge"}
                        </button>
                    </div>

                    {move || blocks.get().into_iter().enumerate().map(|(index, block)| {
                        let title_value = block.content.title.clone().unwrap_or_default();
                        let image_value = block.content.image_url.clone().unwrap_or_default();
                        let limit_value = block.content.limit.map(|l| l.to_string()).unwrap_or_default();
                        view! {
                            <div class="block-card">
                                <div class="block-card__header">
                                    <span class="block-card__kind">{kind_label(block.kind)}</span>
                                    <div class="block-card__actions">
                                        <button class="button button--ghost button--small" on:click=move |_| move_block(index, -1)>
                                            {icon("arrow-up")}
                                        </button>
                                        <button class="button button--ghost button--small" on:click=move |_| move_block(index, 1)>
                                            {icon("arrow-down")}
                                        </button>
                                        <button class="button button--ghost button--small" on:click=move |_| remove_block(index)>
                                            {icon("delete")}
                                        </button>
                                    </div>
                                </div>
                                {match block.kind {
                                    BlockKind::Image => view! {
                                        <div class="block-card__fields">
                                            <input
                                                type="text"
                                                class="form__input"
                                                placeholder="Image URL"
                                                prop:value=image_value
                                                on:change=move |ev| set_block_image_url(index, event_target_value(&ev))
                                            />
                                        </div>
                                    }.into_any(),
                                    BlockKind::Unknown => view! {
                                        <div class="block-card__fields">
                                            <span class="block-card__note">{"Unsupported block kind"}</span>
                                        </div>
                                    }.into_any(),
                                    _ => view! {
                                        <div class="block-card__fields">
                                            <input
                                                type="text"
                                                class="form__input"
                                                placeholder="Section title (optional)"
                                                prop:value=title_value
                                                on:change=move |ev| set_block_title(index, event_target_value(&ev))
                                            />
                                            <input
                                                type="text"
                                                class="form__input form__input--narrow"
                                                placeholder="Limit"
                                                prop:value=limit_value
                                                on:change=move |ev| set_block_limit(index, event_target_value(&ev))
                                            />
                                        </div>
                                    }.into_any(),
                                }}
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="page-editor__preview">
                    {move || blocks.get().iter().map(render_block).collect_view()}
                </div>
            </div>
        </div>
    }
}
