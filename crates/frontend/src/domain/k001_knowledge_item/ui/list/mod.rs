pub mod state;

use self::state::create_state;
use crate::domain::k001_knowledge_item::api::{delete_knowledge_item, fetch_knowledge_items};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, pick_identifier, tab_label_for_key};
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::domain::k001_knowledge_item::KnowledgeItem;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct KnowledgeItemRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub category: String,
    pub tags: String,
    pub published: bool,
    pub created_at: String,
}

impl From<KnowledgeItem> for KnowledgeItemRow {
    fn from(item: KnowledgeItem) -> Self {
        Self {
            id: item.base.id.as_string(),
            code: item.base.code,
            description: item.base.description,
            category: item.category,
            tags: item.tags.join(", "),
            published: item.published,
            created_at: format_timestamp(item.base.metadata.created_at),
        }
    }
}

impl Sortable for KnowledgeItemRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn KnowledgeItemList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (items, set_items) = signal::<Vec<KnowledgeItemRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_knowledge_items().await {
                Ok(v) => {
                    let rows: Vec<KnowledgeItemRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_details_tab = move |id: Option<String>, identifier: String| {
        let key = match &id {
            Some(id) => format!("k001_knowledge_item_detail_{}", id),
            None => "k001_knowledge_item_detail_new".to_string(),
        };
        let title = detail_tab_label(KnowledgeItem::element_name(), &identifier);
        tabs_store.open_tab(&key, &title);
    };

    let handle_create_new = move || {
        open_details_tab(None, "new".to_string());
    };

    let handle_edit = move |id: String| {
        let rows = items.get();
        if let Some(row) = rows.iter().find(|item| item.id == id) {
            let identifier = pick_identifier(
                Some(row.code.as_str()),
                None,
                Some(row.description.as_str()),
                &row.id,
            )
            .to_string();
            open_details_tab(Some(id), identifier);
        }
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let mut items_vec = items.get();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete selected items? Count: {}", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                if let Err(e) = delete_knowledge_item(&id).await {
                    set_error.set(Some(e));
                }
            }
            match fetch_knowledge_items().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_selected.set(HashSet::new());
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{tab_label_for_key("k001_knowledge_item")}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"New item"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {move || format!("Delete ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        let current_items = items.get();
                                        if checked {
                                            set_selected.update(|s| {
                                                for item in current_items.iter() {
                                                    s.insert(item.id.clone());
                                                }
                                            });
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("code")>
                                "Code"
                                <span class={move || get_sort_class(&state.get().sort_field, "code")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "code", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("description")>
                                "Title"
                                <span class={move || get_sort_class(&state.get().sort_field, "description")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "description", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("category")>
                                "Category"
                                <span class={move || get_sort_class(&state.get().sort_field, "category")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "category", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Tags"}</th>
                            <th class="table__header-cell">{"Published"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                "Created"
                                <span class={move || get_sort_class(&state.get().sort_field, "created_at")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "created_at", state.get().sort_ascending)}
                                </span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_checkbox = id.clone();
                            let id_for_toggle = id.clone();
                            let id_for_selected = id.clone();
                            let id_for_click = id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected={move || selected.get().contains(&id_for_selected)}
                                    on:click=move |_| handle_edit(id_for_click.clone())
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                        on_change=Callback::new(move |checked| toggle_select(id_for_toggle.clone(), checked))
                                    />
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.category}</td>
                                    <td class="table__cell">{row.tags}</td>
                                    <td class="table__cell">{if row.published { "yes" } else { "-" }}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
