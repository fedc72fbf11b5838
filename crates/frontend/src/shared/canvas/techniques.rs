//! Technique registry - the single source of truth for canvas element
//! types that get their own editor tab.
//!
//! A canvas may carry many elements of many types; only the types
//! registered here produce tabs. The registry is fixed content, so both
//! lookup and tab derivation are plain functions over a const table.

use contracts::shared::canvas::CanvasElement;

/// Canvas element type tag of a business model canvas artifact
pub const BUSINESS_MODEL_CANVAS: &str = "bmc";

/// Canvas element type tag of a user story mapping artifact
pub const USER_STORY: &str = "userStory";

/// Display configuration of a registered technique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueConfig {
    /// Canvas element type this config belongs to
    pub element_type: &'static str,
    /// Tab caption
    pub label: &'static str,
    /// Icon name resolved through `shared::icons::icon`
    pub icon: &'static str,
    /// Stable tab identifier, used for deduplication
    pub tab_key: &'static str,
    /// Short description shown as tab tooltip
    pub description: &'static str,
}

const TECHNIQUES: &[TechniqueConfig] = &[
    TechniqueConfig {
        element_type: BUSINESS_MODEL_CANVAS,
        label: "Business Model Canvas",
        icon: "grid",
        tab_key: "business-model-canvas",
        description: "Nine-building-block business model overview",
    },
    TechniqueConfig {
        element_type: USER_STORY,
        label: "User Story Map",
        icon: "map",
        tab_key: "user-story",
        description: "Backbone and walking skeleton of user activities",
    },
];

/// Look up the technique config for a canvas element type.
///
/// Unregistered types yield `None`; that is the normal case for plain
/// canvas content (notes, shapes) and never an error.
pub fn technique_for(element_type: &str) -> Option<&'static TechniqueConfig> {
    TECHNIQUES.iter().find(|t| t.element_type == element_type)
}

/// Derive the ordered tab set for a canvas state.
///
/// Walks the elements in order and collects the config of every
/// registered type on its first occurrence; later elements with an
/// already-seen `tab_key` are skipped, as are elements of unregistered
/// types. `None` behaves as an empty canvas.
///
/// Pure function of the input and the registry; recomputing it on every
/// render is fine.
pub fn derive_tabs(elements: Option<&[CanvasElement]>) -> Vec<&'static TechniqueConfig> {
    let mut seen_keys: Vec<&'static str> = Vec::new();
    let mut tabs = Vec::new();

    for element in elements.unwrap_or_default() {
        if let Some(config) = technique_for(&element.element_type) {
            if !seen_keys.contains(&config.tab_key) {
                seen_keys.push(config.tab_key);
                tabs.push(config);
            }
        }
    }

    tabs
}

/// First element of the given type, or `None`
pub fn find_element_by_type<'a>(
    elements: &'a [CanvasElement],
    element_type: &str,
) -> Option<&'a CanvasElement> {
    elements.iter().find(|e| e.element_type == element_type)
}

/// First business model canvas on the canvas, if any
pub fn find_business_model_canvas(elements: &[CanvasElement]) -> Option<&CanvasElement> {
    find_element_by_type(elements, BUSINESS_MODEL_CANVAS)
}

/// First user story map on the canvas, if any
pub fn find_user_story(elements: &[CanvasElement]) -> Option<&CanvasElement> {
    find_element_by_type(elements, USER_STORY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn el(element_type: &str) -> CanvasElement {
        CanvasElement::new(element_type)
    }

    #[test]
    fn lookup_finds_registered_types() {
        assert_eq!(
            technique_for("bmc").map(|t| t.tab_key),
            Some("business-model-canvas")
        );
        assert_eq!(
            technique_for("userStory").map(|t| t.tab_key),
            Some("user-story")
        );
        assert!(technique_for("stickyNote").is_none());
    }

    #[test]
    fn empty_and_absent_inputs_yield_no_tabs() {
        assert!(derive_tabs(Some(&[])).is_empty());
        assert!(derive_tabs(None).is_empty());
    }

    #[test]
    fn unknown_types_are_silently_skipped() {
        let elements = vec![el("unknown")];
        assert!(derive_tabs(Some(&elements)).is_empty());

        let elements = vec![el("stickyNote"), el("bmc"), el("arrow")];
        let tabs = derive_tabs(Some(&elements));
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].element_type, "bmc");
    }

    #[test]
    fn tabs_follow_first_seen_order() {
        let elements = vec![el("userStory"), el("bmc")];
        let tabs = derive_tabs(Some(&elements));
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].element_type, "userStory");
        assert_eq!(tabs[1].element_type, "bmc");
    }

    #[test]
    fn duplicate_types_keep_only_the_first_occurrence() {
        let elements = vec![el("bmc"), el("userStory"), el("bmc"), el("bmc")];
        let tabs = derive_tabs(Some(&elements));
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].element_type, "bmc");
        assert_eq!(tabs[1].element_type, "userStory");
    }

    #[test]
    fn no_two_tabs_share_a_tab_key() {
        let elements = vec![el("bmc"), el("userStory"), el("x"), el("userStory"), el("bmc")];
        let tabs = derive_tabs(Some(&elements));
        let mut keys: Vec<_> = tabs.iter().map(|t| t.tab_key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), tabs.len());
    }

    #[test]
    fn find_element_returns_the_first_match() {
        let first = CanvasElement::with_data("bmc", json!({"id": 1}));
        let second = CanvasElement::with_data("bmc", json!({"id": 2}));
        let elements = vec![first.clone(), second];

        let found = find_element_by_type(&elements, "bmc").unwrap();
        assert_eq!(found.data, json!({"id": 1}));
        assert_eq!(found.id, first.id);

        assert!(find_element_by_type(&elements, "userStory").is_none());
    }

    #[test]
    fn convenience_finders_match_their_type_tags() {
        let elements = vec![el("userStory"), el("bmc")];
        assert_eq!(
            find_business_model_canvas(&elements).map(|e| e.element_type.as_str()),
            Some("bmc")
        );
        assert_eq!(
            find_user_story(&elements).map(|e| e.element_type.as_str()),
            Some("userStory")
        );
    }
}
