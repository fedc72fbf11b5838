use crate::domain::k003_blog_post::api::{fetch_blog_post, upsert_blog_post};
use contracts::domain::k003_blog_post::BlogPostDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn BlogPostDetails(
    #[prop(optional_no_strip)] id: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (slug, set_slug) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (published, set_published) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let post_id = StoredValue::new(id.clone());

    if let Some(id) = id {
        spawn_local(async move {
            match fetch_blog_post(&id).await {
                Ok(post) => {
                    set_title.set(post.base.description);
                    set_slug.set(post.slug);
                    set_author.set(post.author);
                    set_body.set(post.body);
                    set_published.set(post.published_at.is_some());
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    let save = move |_| {
        let dto = BlogPostDto {
            id: post_id.get_value(),
            code: None,
            description: title.get(),
            slug: slug.get(),
            body: body.get(),
            author: author.get(),
            published_at: published.get().then(chrono::Utc::now),
            comment: None,
        };
        spawn_local(async move {
            match upsert_blog_post(dto).await {
                Ok(_) => on_close.run(()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details">
            <div class="header">
                <h2>{move || if post_id.get_value().is_some() { "Edit post" } else { "New post" }}</h2>
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
                    <label class="form__label">{"Author"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || author.get()
                        on:input=move |ev| set_author.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Body (markdown)"}</label>
                    <textarea
                        class="form__textarea"
                        rows="16"
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
        </div>
    }
}
