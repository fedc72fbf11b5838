//! Tab content registry - the single source of truth for tab.key → View.
//!
//! `render_tab_content` maps a tab key to its content view. Every tab
//! key the application knows is collected here in one place.

use crate::domain::k001_knowledge_item::ui::details::KnowledgeItemDetails;
use crate::domain::k001_knowledge_item::ui::list::KnowledgeItemList;
use crate::domain::k002_event::ui::details::EventDetails;
use crate::domain::k002_event::ui::list::EventList;
use crate::domain::k003_blog_post::ui::details::BlogPostDetails;
use crate::domain::k003_blog_post::ui::list::BlogPostList;
use crate::domain::k004_template::ui::list::TemplateList;
use crate::domain::k005_page::ui::editor::PageEditor;
use crate::domain::k005_page::ui::list::PageList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::site_settings::ui::SiteSettingsPage;
use leptos::prelude::*;

/// Renders the content of a tab by its key.
///
/// # Arguments
/// * `key` - unique tab key (e.g. "k001_knowledge_item",
///   "k005_page_editor_<id>")
/// * `tabs_store` - context used to close detail tabs from within
///
/// # Returns
/// AnyView with the tab content, or a placeholder for unknown keys
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Content domains (k001-k003)
        // ═══════════════════════════════════════════════════════════════════
        "k001_knowledge_item" => view! { <KnowledgeItemList /> }.into_any(),
        k if k.starts_with("k001_knowledge_item_detail_") => {
            let id_str = k.strip_prefix("k001_knowledge_item_detail_").unwrap();
            let id = if id_str == "new" {
                None
            } else {
                Some(id_str.to_string())
            };
            view! {
                <KnowledgeItemDetails
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        "k002_event" => view! { <EventList /> }.into_any(),
        k if k.starts_with("k002_event_detail_") => {
            let id_str = k.strip_prefix("k002_event_detail_").unwrap();
            let id = if id_str == "new" {
                None
            } else {
                Some(id_str.to_string())
            };
            view! {
                <EventDetails
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        "k003_blog_post" => view! { <BlogPostList /> }.into_any(),
        k if k.starts_with("k003_blog_post_detail_") => {
            let id_str = k.strip_prefix("k003_blog_post_detail_").unwrap();
            let id = if id_str == "new" {
                None
            } else {
                Some(id_str.to_string())
            };
            view! {
                <BlogPostDetails
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Site composition (k004-k005)
        // ═══════════════════════════════════════════════════════════════════
        "k004_template" => view! { <TemplateList /> }.into_any(),

        "k005_page" => view! { <PageList /> }.into_any(),
        k if k.starts_with("k005_page_editor_") => {
            let id_str = k.strip_prefix("k005_page_editor_").unwrap();
            let id = if id_str == "new" {
                None
            } else {
                Some(id_str.to_string())
            };
            view! {
                <PageEditor
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // System (sys_*)
        // ═══════════════════════════════════════════════════════════════════
        "sys_site_settings" => view! { <SiteSettingsPage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / Fallback
        // ═══════════════════════════════════════════════════════════════════
        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
