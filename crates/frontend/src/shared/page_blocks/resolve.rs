//! Pure resolution rules of the block renderer.
//!
//! Listing blocks share one defaulting policy: an explicitly provided
//! value from the block content wins, an absent one falls back to the
//! kind default. Settings gating differs per kind on purpose: the
//! events and knowledge listings hide on a falsy flag (false or
//! absent), while the image and generic recommendations blocks are
//! never gated.

use contracts::shared::content_block::BlockContent;
use contracts::shared::recommendations::ContentType;
use contracts::system::site_settings::SiteSettings;
use uuid::Uuid;

/// Default card count of a listing block
pub const DEFAULT_LIMIT: u32 = 6;

/// Fully resolved props handed to the recommendations listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListingProps {
    pub title: String,
    /// `None` lets the listing fall back to all active types
    pub content_types: Option<Vec<ContentType>>,
    pub limit: u32,
    pub show_view_all: bool,
    pub exclude_ids: Vec<Uuid>,
}

/// Resolve listing props for a block whose content types are fixed by
/// its kind (events list, knowledge items list).
pub fn resolve_fixed_listing(
    content: &BlockContent,
    default_title: &str,
    fixed_types: &[ContentType],
) -> ListingProps {
    ListingProps {
        title: content
            .title
            .clone()
            .unwrap_or_else(|| default_title.to_string()),
        content_types: Some(fixed_types.to_vec()),
        limit: content.limit.unwrap_or(DEFAULT_LIMIT),
        show_view_all: content.show_view_all.unwrap_or(true),
        exclude_ids: content.exclude_ids.clone().unwrap_or_default(),
    }
}

/// Resolve listing props for the generic recommendations block.
///
/// Content types come from the plural field, falling back to the legacy
/// singular one. Retired types are dropped; if nothing usable remains
/// the result is `None` and the listing decides (all active types).
pub fn resolve_recommendations(content: &BlockContent) -> ListingProps {
    let requested: Vec<ContentType> = content
        .content_types
        .clone()
        .or_else(|| content.content_type.map(|ct| vec![ct]))
        .unwrap_or_default();

    let usable: Vec<ContentType> = requested.into_iter().filter(|ct| !ct.is_retired()).collect();

    ListingProps {
        title: content
            .title
            .clone()
            .unwrap_or_else(|| "Recommended for You".to_string()),
        content_types: if usable.is_empty() { None } else { Some(usable) },
        limit: content.limit.unwrap_or(DEFAULT_LIMIT),
        show_view_all: content.show_view_all.unwrap_or(true),
        exclude_ids: content.exclude_ids.clone().unwrap_or_default(),
    }
}

/// Render decision of a flag-gated listing block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingGate {
    /// Settings still loading: render no content panel yet
    Loading,
    /// Flag checked and falsy: render the disabled placeholder
    Disabled,
    /// Flag set to true: render the listing
    Enabled,
}

/// Gate a listing block on one of the `show_*` flags.
///
/// A missing settings snapshot or a missing flag counts as falsy here;
/// only an explicit `true` enables the listing.
pub fn listing_gate(
    settings: Option<&SiteSettings>,
    is_loading: bool,
    flag: impl Fn(&SiteSettings) -> Option<bool>,
) -> ListingGate {
    if is_loading {
        return ListingGate::Loading;
    }
    match settings.and_then(flag) {
        Some(true) => ListingGate::Enabled,
        Some(false) | None => ListingGate::Disabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(show_events: Option<bool>) -> SiteSettings {
        SiteSettings {
            show_events,
            ..SiteSettings::defaults()
        }
    }

    #[test]
    fn empty_content_gets_all_defaults() {
        let props = resolve_recommendations(&BlockContent::default());
        assert_eq!(props.title, "Recommended for You");
        assert_eq!(props.content_types, None);
        assert_eq!(props.limit, 6);
        assert!(props.show_view_all);
        assert!(props.exclude_ids.is_empty());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let id = Uuid::new_v4();
        let content = BlockContent {
            title: Some("Editor's picks".into()),
            content_types: Some(vec![ContentType::BlogPost]),
            limit: Some(3),
            show_view_all: Some(false),
            exclude_ids: Some(vec![id]),
            ..Default::default()
        };
        let props = resolve_recommendations(&content);
        assert_eq!(props.title, "Editor's picks");
        assert_eq!(props.content_types, Some(vec![ContentType::BlogPost]));
        assert_eq!(props.limit, 3);
        assert!(!props.show_view_all);
        assert_eq!(props.exclude_ids, vec![id]);
    }

    #[test]
    fn legacy_singular_content_type_is_honored() {
        let content = BlockContent {
            content_type: Some(ContentType::Event),
            ..Default::default()
        };
        let props = resolve_recommendations(&content);
        assert_eq!(props.content_types, Some(vec![ContentType::Event]));
    }

    #[test]
    fn retired_testimonial_resolves_to_none() {
        let content = BlockContent {
            content_type: Some(ContentType::Testimonial),
            ..Default::default()
        };
        let props = resolve_recommendations(&content);
        assert_eq!(props.content_types, None);

        // plural form with a retired entry mixed in keeps the live ones
        let content = BlockContent {
            content_types: Some(vec![ContentType::Testimonial, ContentType::Event]),
            ..Default::default()
        };
        let props = resolve_recommendations(&content);
        assert_eq!(props.content_types, Some(vec![ContentType::Event]));
    }

    #[test]
    fn fixed_listing_ignores_content_types_from_the_block() {
        let content = BlockContent {
            content_types: Some(vec![ContentType::BlogPost]),
            ..Default::default()
        };
        let props = resolve_fixed_listing(&content, "Upcoming Events", &[ContentType::Event]);
        assert_eq!(props.content_types, Some(vec![ContentType::Event]));
        assert_eq!(props.title, "Upcoming Events");
    }

    #[test]
    fn gate_suspends_while_loading() {
        let s = settings(Some(true));
        assert_eq!(
            listing_gate(Some(&s), true, |s| s.show_events),
            ListingGate::Loading
        );
        // loading wins even without a snapshot
        assert_eq!(
            listing_gate(None, true, |s| s.show_events),
            ListingGate::Loading
        );
    }

    #[test]
    fn gate_disables_on_explicit_false() {
        let s = settings(Some(false));
        assert_eq!(
            listing_gate(Some(&s), false, |s| s.show_events),
            ListingGate::Disabled
        );
    }

    #[test]
    fn gate_treats_absent_flag_as_falsy() {
        let s = settings(None);
        assert_eq!(
            listing_gate(Some(&s), false, |s| s.show_events),
            ListingGate::Disabled
        );
        assert_eq!(
            listing_gate(None, false, |s| s.show_events),
            ListingGate::Disabled
        );
    }

    #[test]
    fn gate_enables_on_explicit_true() {
        let s = settings(Some(true));
        assert_eq!(
            listing_gate(Some(&s), false, |s| s.show_events),
            ListingGate::Enabled
        );
    }
}
