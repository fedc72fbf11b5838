//! Tab labels - the single source of truth for tab titles.
//!
//! Aggregate tabs take their plural name from contracts; system tabs
//! are hardcoded here.

use contracts::domain::common::AggregateRoot;
use contracts::domain::k001_knowledge_item::KnowledgeItem;
use contracts::domain::k002_event::Event;
use contracts::domain::k003_blog_post::BlogPost;
use contracts::domain::k004_template::Template;
use contracts::domain::k005_page::Page;

/// Returns the human-readable title for a given tab key.
///
/// Fallback: empty string, which makes the sidebar fall back to the key.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "k001_knowledge_item" => KnowledgeItem::list_name(),
        "k002_event" => Event::list_name(),
        "k003_blog_post" => BlogPost::list_name(),
        "k004_template" => Template::list_name(),
        "k005_page" => Page::list_name(),

        // ── System (sys_*) ────────────────────────────────────────────────
        "sys_site_settings" => "Site settings",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

/// Returns the first non-empty identifier from the fallback chain.
///
/// Priority order: code → slug → description → id
pub fn pick_identifier<'a>(
    code: Option<&'a str>,
    slug: Option<&'a str>,
    description: Option<&'a str>,
    id: &'a str,
) -> &'a str {
    [code, slug, description]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(id)
}

/// Builds a detail-tab title: "<entity> · <identifier>".
///
/// Example: `detail_tab_label("Event", "EV-001")` → `"Event · EV-001"`
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}
