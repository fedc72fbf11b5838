use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content domains a listing can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "knowledgeItem")]
    KnowledgeItem,
    #[serde(rename = "event")]
    Event,
    #[serde(rename = "blogPost")]
    BlogPost,
    /// Retired. Old pages may still carry it; listings ignore it.
    #[serde(rename = "testimonial")]
    Testimonial,
}

impl ContentType {
    /// Stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ContentType::KnowledgeItem => "knowledgeItem",
            ContentType::Event => "event",
            ContentType::BlogPost => "blogPost",
            ContentType::Testimonial => "testimonial",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::KnowledgeItem => "Knowledge item",
            ContentType::Event => "Event",
            ContentType::BlogPost => "Blog post",
            ContentType::Testimonial => "Testimonial",
        }
    }

    /// Parse from a string code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "knowledgeItem" => Some(ContentType::KnowledgeItem),
            "event" => Some(ContentType::Event),
            "blogPost" => Some(ContentType::BlogPost),
            "testimonial" => Some(ContentType::Testimonial),
            _ => None,
        }
    }

    /// Types that are no longer served by listings
    pub fn is_retired(&self) -> bool {
        matches!(self, ContentType::Testimonial)
    }

    /// All currently served types
    pub fn active() -> Vec<ContentType> {
        vec![
            ContentType::KnowledgeItem,
            ContentType::Event,
            ContentType::BlogPost,
        ]
    }
}

/// Query accepted by the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecommendationsQuery {
    /// `None` means "all active types"
    #[serde(rename = "contentTypes")]
    pub content_types: Option<Vec<ContentType>>,

    pub limit: Option<u32>,

    #[serde(rename = "excludeIds", default)]
    pub exclude_ids: Vec<Uuid>,
}

/// One recommended entry, shaped for card rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationItem {
    pub id: Uuid,

    #[serde(rename = "contentType")]
    pub content_type: ContentType,

    pub title: String,

    pub summary: Option<String>,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    /// Timestamp used for newest-first ordering
    #[serde(rename = "sortedAt")]
    pub sorted_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for ct in [
            ContentType::KnowledgeItem,
            ContentType::Event,
            ContentType::BlogPost,
            ContentType::Testimonial,
        ] {
            assert_eq!(ContentType::from_code(ct.code()), Some(ct));
        }
        assert_eq!(ContentType::from_code("podcast"), None);
    }

    #[test]
    fn active_excludes_retired_types() {
        assert!(ContentType::active().iter().all(|ct| !ct.is_retired()));
        assert!(ContentType::Testimonial.is_retired());
    }
}
