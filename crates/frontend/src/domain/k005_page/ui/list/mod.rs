use crate::domain::k005_page::api::{delete_page, fetch_pages};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::icons::icon;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::domain::k005_page::Page;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PageRow {
    pub id: String,
    pub description: String,
    pub slug: String,
    pub block_count: usize,
    pub published: bool,
}

impl From<Page> for PageRow {
    fn from(page: Page) -> Self {
        Self {
            id: page.base.id.as_string(),
            description: page.base.description,
            slug: page.slug,
            block_count: page.blocks.len(),
            published: page.published,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PageList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<PageRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_pages().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_editor_tab = move |id: Option<String>, identifier: String| {
        let key = match &id {
            Some(id) => format!("k005_page_editor_{}", id),
            None => "k005_page_editor_new".to_string(),
        };
        let title = detail_tab_label(Page::element_name(), &identifier);
        tabs_store.open_tab(&key, &title);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this page?").unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = delete_page(&id).await {
                set_error.set(Some(e));
            }
            match fetch_pages().await {
                Ok(v) => set_items.set(v.into_iter().map(Into::into).collect()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{tab_label_for_key("k005_page")}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_editor_tab(None, "new".to_string())>
                        {icon("plus")}
                        {"New page"}
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
                            <th class="table__header-cell">{"Blocks"}</th>
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
                                    on:click=move |_| open_editor_tab(Some(id_for_click.clone()), slug_for_click.clone())
                                >
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.slug}</td>
                                    <td class="table__cell">{row.block_count}</td>
                                    <td class="table__cell">{if row.published { "yes" } else { "-" }}</td>
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
