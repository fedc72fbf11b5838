use crate::domain::k003_blog_post::api::{delete_blog_post, fetch_blog_posts};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::domain::k003_blog_post::BlogPost;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct BlogPostRow {
    pub id: String,
    pub description: String,
    pub slug: String,
    pub author: String,
    pub published_at: String,
}

impl From<BlogPost> for BlogPostRow {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.base.id.as_string(),
            description: post.base.description,
            slug: post.slug,
            author: post.author,
            published_at: post
                .published_at
                .map(format_timestamp)
                .unwrap_or_else(|| "draft".to_string()),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BlogPostList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<BlogPostRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_blog_posts().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_details_tab = move |id: Option<String>, identifier: String| {
        let key = match &id {
            Some(id) => format!("k003_blog_post_detail_{}", id),
            None => "k003_blog_post_detail_new".to_string(),
        };
        let title = detail_tab_label(BlogPost::element_name(), &identifier);
        tabs_store.open_tab(&key, &title);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this post?").unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = delete_blog_post(&id).await {
                set_error.set(Some(e));
            }
            match fetch_blog_posts().await {
                Ok(v) => set_items.set(v.into_iter().map(Into::into).collect()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{tab_label_for_key("k003_blog_post")}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_tab(None, "new".to_string())>
                        {icon("plus")}
                        {"New post"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Title"}</th>
                            <th class="table__header-cell">{"Slug"}</th>
                            <th class="table__header-cell">{"Author"}</th>
                            <th class="table__header-cell">{"Published"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let slug_for_click = row.slug.clone();
                            let id_for_delete = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_details_tab(Some(id_for_click.clone()), slug_for_click.clone())
                                >
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.slug}</td>
                                    <td class="table__cell">{row.author}</td>
                                    <td class="table__cell">{row.published_at}</td>
                                    <td class="table__cell table__cell--actions" on:click=move |ev| ev.stop_propagation()>
                                        <button
                                            class="button button--ghost button--small"
                                            on:click=move |_| handle_delete(id_for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
