//! Cross-domain recommendations service.
//!
//! Pulls published content from the knowledge, event and blog domains,
//! filters it by the requested type mix and exclusion list, orders it
//! newest-first and truncates to the limit. The merge rules live in
//! pure helpers so they stay testable without a database.

use contracts::domain::k001_knowledge_item::KnowledgeItem;
use contracts::domain::k002_event::Event;
use contracts::domain::k003_blog_post::BlogPost;
use contracts::shared::recommendations::{ContentType, RecommendationItem, RecommendationsQuery};
use uuid::Uuid;

use crate::domain::{k001_knowledge_item, k002_event, k003_blog_post};

/// Default card count when the query does not specify one
pub const DEFAULT_LIMIT: u32 = 6;

/// Hard cap guarding against abusive limit values
pub const MAX_LIMIT: u32 = 50;

fn card_from_knowledge_item(item: &KnowledgeItem) -> RecommendationItem {
    RecommendationItem {
        id: item.base.id.value(),
        content_type: ContentType::KnowledgeItem,
        title: item.base.description.clone(),
        summary: summarize(&item.body),
        image_url: item.cover_image_url.clone(),
        sorted_at: item.base.metadata.created_at,
    }
}

fn card_from_event(event: &Event) -> RecommendationItem {
    RecommendationItem {
        id: event.base.id.value(),
        content_type: ContentType::Event,
        title: event.base.description.clone(),
        summary: Some(event.location.clone()).filter(|l| !l.is_empty()),
        image_url: None,
        sorted_at: event.starts_at,
    }
}

fn card_from_blog_post(post: &BlogPost) -> RecommendationItem {
    RecommendationItem {
        id: post.base.id.value(),
        content_type: ContentType::BlogPost,
        title: post.base.description.clone(),
        summary: summarize(&post.body),
        image_url: None,
        sorted_at: post.published_at.unwrap_or(post.base.metadata.created_at),
    }
}

/// First non-empty line of a markdown body, clipped for card display
fn summarize(body: &str) -> Option<String> {
    let line = body
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))?;
    let mut summary: String = line.chars().take(160).collect();
    if line.chars().count() > 160 {
        summary.push('…');
    }
    Some(summary)
}

/// Which content types a query actually asks for.
///
/// `None` and empty both mean "all active types"; retired types are
/// dropped from explicit requests.
fn effective_types(query: &RecommendationsQuery) -> Vec<ContentType> {
    let requested: Vec<ContentType> = query
        .content_types
        .clone()
        .unwrap_or_default()
        .into_iter()
        .filter(|ct| !ct.is_retired())
        .collect();
    if requested.is_empty() {
        ContentType::active()
    } else {
        requested
    }
}

/// Merge pre-sorted per-domain card lists into the final response
fn merge_cards(
    mut cards: Vec<RecommendationItem>,
    exclude_ids: &[Uuid],
    limit: u32,
) -> Vec<RecommendationItem> {
    cards.retain(|card| !exclude_ids.contains(&card.id));
    cards.sort_by(|a, b| b.sorted_at.cmp(&a.sorted_at));
    cards.truncate(limit.min(MAX_LIMIT) as usize);
    cards
}

/// Serve a recommendations query
pub async fn list(query: RecommendationsQuery) -> anyhow::Result<Vec<RecommendationItem>> {
    let types = effective_types(&query);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let mut cards: Vec<RecommendationItem> = Vec::new();

    if types.contains(&ContentType::KnowledgeItem) {
        cards.extend(
            k001_knowledge_item::service::list_published()
                .await?
                .iter()
                .map(card_from_knowledge_item),
        );
    }
    if types.contains(&ContentType::Event) {
        cards.extend(
            k002_event::service::list_published()
                .await?
                .iter()
                .map(card_from_event),
        );
    }
    if types.contains(&ContentType::BlogPost) {
        cards.extend(
            k003_blog_post::service::list_published()
                .await?
                .iter()
                .map(card_from_blog_post),
        );
    }

    Ok(merge_cards(cards, &query.exclude_ids, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn card(minutes_ago: i64) -> RecommendationItem {
        RecommendationItem {
            id: Uuid::new_v4(),
            content_type: ContentType::BlogPost,
            title: format!("card-{}", minutes_ago),
            summary: None,
            image_url: None,
            sorted_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn effective_types_defaults_to_all_active() {
        let query = RecommendationsQuery::default();
        assert_eq!(effective_types(&query), ContentType::active());

        let query = RecommendationsQuery {
            content_types: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(effective_types(&query), ContentType::active());
    }

    #[test]
    fn effective_types_drops_retired_requests() {
        let query = RecommendationsQuery {
            content_types: Some(vec![ContentType::Testimonial]),
            ..Default::default()
        };
        // a testimonial-only request degrades to the active set
        assert_eq!(effective_types(&query), ContentType::active());

        let query = RecommendationsQuery {
            content_types: Some(vec![ContentType::Testimonial, ContentType::Event]),
            ..Default::default()
        };
        assert_eq!(effective_types(&query), vec![ContentType::Event]);
    }

    #[test]
    fn merge_orders_newest_first_and_truncates() {
        let cards = vec![card(30), card(5), card(60), card(1)];
        let merged = merge_cards(cards, &[], 2);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "card-1");
        assert_eq!(merged[1].title, "card-5");
    }

    #[test]
    fn merge_applies_exclusions() {
        let keep = card(1);
        let drop = card(2);
        let excluded = vec![drop.id];
        let merged = merge_cards(vec![keep.clone(), drop], &excluded, 10);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, keep.id);
    }

    #[test]
    fn merge_caps_the_limit() {
        let cards: Vec<_> = (0..100).map(|i| card(i)).collect();
        let merged = merge_cards(cards, &[], 1000);
        assert_eq!(merged.len(), MAX_LIMIT as usize);
    }

    #[test]
    fn summarize_skips_headings_and_clips() {
        assert_eq!(
            summarize("# Title\n\nFirst paragraph here."),
            Some("First paragraph here.".to_string())
        );
        assert_eq!(summarize("   \n# only a heading"), None);

        let long = "x".repeat(200);
        let s = summarize(&long).unwrap();
        assert!(s.ends_with('…'));
        assert_eq!(s.chars().count(), 161);
    }
}
