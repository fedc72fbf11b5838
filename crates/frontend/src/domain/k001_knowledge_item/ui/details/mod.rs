use crate::domain::k001_knowledge_item::api::{fetch_knowledge_item, upsert_knowledge_item};
use crate::shared::canvas::{find_business_model_canvas, find_user_story, TechniqueTabStrip};
use crate::shared::icons::icon;
use contracts::domain::k001_knowledge_item::KnowledgeItemDto;
use contracts::shared::canvas::CanvasElement;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Knowledge item editor.
///
/// The lower half is the technique canvas: artifacts attached to the
/// item drive the tab strip, and each registered technique can be
/// attached once (the strip deduplicates by tab key anyway).
#[component]
#[allow(non_snake_case)]
pub fn KnowledgeItemDetails(
    #[prop(optional_no_strip)] id: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (code, set_code) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (cover_image_url, set_cover_image_url) = signal(String::new());
    let (published, set_published) = signal(false);
    let (canvas_elements, set_canvas_elements) = signal::<Vec<CanvasElement>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let item_id = StoredValue::new(id.clone());

    // Load existing item
    if let Some(id) = id {
        spawn_local(async move {
            match fetch_knowledge_item(&id).await {
                Ok(item) => {
                    set_code.set(item.base.code);
                    set_title.set(item.base.description);
                    set_category.set(item.category);
                    set_body.set(item.body);
                    set_tags.set(item.tags.join(", "));
                    set_cover_image_url.set(item.cover_image_url.unwrap_or_default());
                    set_published.set(item.published);
                    set_canvas_elements.set(item.canvas_elements);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    let attach_element = move |element_type: &'static str| {
        set_canvas_elements.update(|elements| {
            let already_there = match element_type {
                "bmc" => find_business_model_canvas(elements).is_some(),
                "userStory" => find_user_story(elements).is_some(),
                _ => false,
            };
            if !already_there {
                elements.push(CanvasElement::new(element_type));
            }
        });
    };

    let save = move |_| {
        let dto = KnowledgeItemDto {
            id: item_id.get_value(),
            code: Some(code.get()).filter(|c| !c.is_empty()),
            description: title.get(),
            category: category.get(),
            body: body.get(),
            tags: tags
                .get()
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            cover_image_url: Some(cover_image_url.get()).filter(|u| !u.is_empty()),
            published: published.get(),
            canvas_elements: Some(canvas_elements.get()),
            comment: None,
        };
        spawn_local(async move {
            match upsert_knowledge_item(dto).await {
                Ok(_) => on_close.run(()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details">
            <div class="header">
                <h2>{move || if item_id.get_value().is_some() { "Edit knowledge item" } else { "New knowledge item" }}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=save>
                        {"Save"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        {"Cancel"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form">
                <div class="form__row">
                    <label class="form__label">{"Code"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || code.get()
                        on:input=move |ev| set_code.set(event_target_value(&ev))
                    />
                </div>
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
                    <label class="form__label">{"Category"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Tags (comma-separated)"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || tags.get()
                        on:input=move |ev| set_tags.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Cover image URL"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || cover_image_url.get()
                        on:input=move |ev| set_cover_image_url.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Body (markdown)"}</label>
                    <textarea
                        class="form__textarea"
                        rows="12"
                        prop:value=move || body.get()
                        on:input=move |ev| set_body.set(event_target_value(&ev))
                    ></textarea>
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

            <div class="canvas-section">
                <div class="canvas-section__header">
                    <h3>{"Technique canvas"}</h3>
                    <div class="canvas-section__actions">
                        <button class="button button--ghost" on:click=move |_| attach_element("bmc")>
                            {icon("grid")}
                            {"Attach business model canvas"}
                        </button>
                        <button class="button button--ghost" on:click=move |_| attach_element("userStory")>
                            {icon("map")}
                            {"Attach user story map"}
                        </button>
                    </div>
                </div>
                <TechniqueTabStrip elements=canvas_elements />
            </div>
        </div>
    }
}
