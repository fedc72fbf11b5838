use crate::shared::recommendations::ContentType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind tag of a page block.
///
/// Stored as the JSON `type` field of a block. Kinds this build does not
/// know yet deserialize as `Unknown` instead of failing the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "recommendations")]
    Recommendations,
    #[serde(rename = "eventsList")]
    EventsList,
    #[serde(rename = "knowledgeItemsList")]
    KnowledgeItemsList,
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// A typed section of a composed page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,

    #[serde(default)]
    pub content: BlockContent,

    pub styles: Option<BlockStyles>,
}

impl ContentBlock {
    /// New block of the given kind with empty content
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            content: BlockContent::default(),
            styles: None,
        }
    }
}

/// Block payload. Every field is optional; which fields are read depends
/// on the block kind, and absent fields fall back to renderer defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BlockContent {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    pub alt: Option<String>,

    pub title: Option<String>,

    #[serde(rename = "contentTypes")]
    pub content_types: Option<Vec<ContentType>>,

    /// Legacy singular form, kept readable for pages saved by old builds
    #[serde(rename = "contentType")]
    pub content_type: Option<ContentType>,

    pub limit: Option<u32>,

    #[serde(rename = "showViewAll")]
    pub show_view_all: Option<bool>,

    #[serde(rename = "excludeIds")]
    pub exclude_ids: Option<Vec<Uuid>>,
}

/// Visual style overrides of a block frame
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BlockStyles {
    /// Frame height preset: "small" | "medium" | "large"
    pub height: Option<String>,

    #[serde(rename = "backgroundColor")]
    pub background_color: Option<String>,

    #[serde(rename = "backgroundImageUrl")]
    pub background_image_url: Option<String>,

    pub padding: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        for (kind, tag) in [
            (BlockKind::Image, "image"),
            (BlockKind::Recommendations, "recommendations"),
            (BlockKind::EventsList, "eventsList"),
            (BlockKind::KnowledgeItemsList, "knowledgeItemsList"),
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", tag));
            let back: BlockKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn unknown_kind_is_tolerated() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"heroCarousel","content":{}}"#).unwrap();
        assert_eq!(block.kind, BlockKind::Unknown);
    }

    #[test]
    fn empty_content_deserializes_to_all_none() {
        let block: ContentBlock = serde_json::from_str(r#"{"type":"image"}"#).unwrap();
        assert_eq!(block.content, BlockContent::default());
        assert!(block.styles.is_none());
    }

    #[test]
    fn legacy_singular_content_type_is_readable() {
        let block: ContentBlock = serde_json::from_str(
            r#"{"type":"recommendations","content":{"contentType":"event","limit":3}}"#,
        )
        .unwrap();
        assert_eq!(block.content.content_type, Some(ContentType::Event));
        assert_eq!(block.content.limit, Some(3));
        assert!(block.content.content_types.is_none());
    }
}
