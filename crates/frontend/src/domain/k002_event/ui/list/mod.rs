use crate::domain::k002_event::api::{delete_event, fetch_events};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, pick_identifier, tab_label_for_key};
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::domain::k002_event::Event;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct EventRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub starts_at: String,
    pub location: String,
    pub published: bool,
}

impl From<Event> for EventRow {
    fn from(ev: Event) -> Self {
        Self {
            id: ev.base.id.as_string(),
            code: ev.base.code,
            description: ev.base.description,
            starts_at: format_timestamp(ev.starts_at),
            location: ev.location,
            published: ev.published,
        }
    }
}

impl Sortable for EventRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "starts_at" => self.starts_at.cmp(&other.starts_at),
            "location" => self
                .location
                .to_lowercase()
                .cmp(&other.location.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EventList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<EventRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let (sort_field, set_sort_field) = signal("starts_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_events().await {
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
            Some(id) => format!("k002_event_detail_{}", id),
            None => "k002_event_detail_new".to_string(),
        };
        let title = detail_tab_label(Event::element_name(), &identifier);
        tabs_store.open_tab(&key, &title);
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
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let sorted_items = move || {
        let mut items_vec = items.get();
        sort_list(&mut items_vec, &sort_field.get(), sort_ascending.get());
        items_vec
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete selected events? Count: {}", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                if let Err(e) = delete_event(&id).await {
                    set_error.set(Some(e));
                }
            }
            match fetch_events().await {
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
                <h2>{tab_label_for_key("k002_event")}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_tab(None, "new".to_string())>
                        {icon("plus")}
                        {"New event"}
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
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("code")>
                                "Code"
                                <span class={move || get_sort_class(&sort_field.get(), "code")}>
                                    {move || get_sort_indicator(&sort_field.get(), "code", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("description")>
                                "Title"
                                <span class={move || get_sort_class(&sort_field.get(), "description")}>
                                    {move || get_sort_indicator(&sort_field.get(), "description", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("starts_at")>
                                "Starts"
                                <span class={move || get_sort_class(&sort_field.get(), "starts_at")}>
                                    {move || get_sort_indicator(&sort_field.get(), "starts_at", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Location"}</th>
                            <th class="table__header-cell">{"Published"}</th>
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
                                    <td class="table__cell">{row.starts_at}</td>
                                    <td class="table__cell">{row.location}</td>
                                    <td class="table__cell">{if row.published { "yes" } else { "-" }}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
