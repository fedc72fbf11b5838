use crate::domain::k004_template::api::{delete_template, fetch_templates};
use crate::domain::k005_page::api::upsert_page;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::icons::icon;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::domain::k004_template::Template;
use contracts::domain::k005_page::{Page, PageDto};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct TemplateRow {
    pub id: String,
    pub description: String,
    pub kind: String,
    pub block_count: usize,
    pub blocks: Vec<contracts::shared::content_block::ContentBlock>,
}

impl From<Template> for TemplateRow {
    fn from(t: Template) -> Self {
        Self {
            id: t.base.id.as_string(),
            description: t.base.description,
            kind: t.kind,
            block_count: t.blocks.len(),
            blocks: t.blocks,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TemplateList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<TemplateRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_templates().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Instantiate a template: create a draft page from its blocks and
    // jump straight into the page editor.
    let create_page_from = move |row: TemplateRow| {
        wasm_bindgen_futures::spawn_local(async move {
            let dto = PageDto {
                description: format!("{} (draft)", row.description),
                slug: format!("draft-{}", &row.id[..8.min(row.id.len())]),
                blocks: row.blocks.clone(),
                ..Default::default()
            };
            match upsert_page(dto).await {
                Ok(page_id) => {
                    let key = format!("k005_page_editor_{}", page_id);
                    let title = detail_tab_label(Page::element_name(), &page_id);
                    tabs_store.open_tab(&key, &title);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this template?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = delete_template(&id).await {
                set_error.set(Some(e));
            }
            match fetch_templates().await {
                Ok(v) => set_items.set(v.into_iter().map(Into::into).collect()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{tab_label_for_key("k004_template")}</h2>
                <div class="header__actions">
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
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Kind"}</th>
                            <th class="table__header-cell">{"Blocks"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let row_for_use = row.clone();
                            let id_for_delete = row.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.description.clone()}</td>
                                    <td class="table__cell">{row.kind.clone()}</td>
                                    <td class="table__cell">{row.block_count}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost button--small"
                                            title="Create page from template"
                                            on:click=move |_| create_page_from(row_for_use.clone())
                                        >
                                            {icon("copy")}
                                            {"Use"}
                                        </button>
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
