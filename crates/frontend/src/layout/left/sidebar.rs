//! Sidebar component with grouped navigation items.
//!
//! Every entry opens (or activates) a tab; labels come from the tab
//! label registry so the sidebar and the tab strip always agree.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "content",
            label: "Content",
            icon: "book-open",
            items: vec![
                (
                    "k001_knowledge_item",
                    tab_label_for_key("k001_knowledge_item"),
                    "book-open",
                ),
                ("k002_event", tab_label_for_key("k002_event"), "calendar"),
                (
                    "k003_blog_post",
                    tab_label_for_key("k003_blog_post"),
                    "file-text",
                ),
            ],
        },
        MenuGroup {
            id: "site",
            label: "Site",
            icon: "layout",
            items: vec![
                ("k005_page", tab_label_for_key("k005_page"), "layout"),
                ("k004_template", tab_label_for_key("k004_template"), "copy"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![(
                "sys_site_settings",
                tab_label_for_key("sys_site_settings"),
                "settings",
            )],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();

    view! {
        <nav class="sidebar">
            {groups
                .into_iter()
                .map(|group| {
                    let expanded = RwSignal::new(true);
                    view! {
                        <div class="sidebar__group">
                            <button
                                class="sidebar__group-header"
                                on:click=move |_| expanded.update(|v| *v = !*v)
                            >
                                {icon(group.icon)}
                                <span>{group.label}</span>
                                <span class="sidebar__chevron">
                                    {move || if expanded.get() { "▾" } else { "▸" }}
                                </span>
                            </button>
                            <ul
                                class="sidebar__items"
                                class:sidebar__items--collapsed=move || !expanded.get()
                            >
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(key, label, item_icon)| {
                                        let is_active = move || {
                                            ctx.active.get().as_deref() == Some(key)
                                        };
                                        view! {
                                            <li>
                                                <button
                                                    class="sidebar__item"
                                                    class:sidebar__item--active=is_active
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    {icon(item_icon)}
                                                    <span>{label}</span>
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
