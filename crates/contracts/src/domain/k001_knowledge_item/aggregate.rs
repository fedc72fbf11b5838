use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::canvas::CanvasElement;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a knowledge item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnowledgeItemId(pub Uuid);

impl KnowledgeItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for KnowledgeItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(KnowledgeItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Knowledge base article with optional attached canvas artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeItem {
    #[serde(flatten)]
    pub base: BaseAggregate<KnowledgeItemId>,

    pub category: String,

    /// Markdown body
    pub body: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(rename = "coverImageUrl")]
    pub cover_image_url: Option<String>,

    pub published: bool,

    /// Technique artifacts placed on the item's editing canvas.
    /// Payloads are opaque here; the canvas tooling owns their shape.
    #[serde(rename = "canvasElements", default)]
    pub canvas_elements: Vec<CanvasElement>,
}

impl KnowledgeItem {
    /// Create a new knowledge item for insertion
    pub fn new_for_insert(
        code: String,
        description: String,
        category: String,
        body: String,
        tags: Vec<String>,
        cover_image_url: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(KnowledgeItemId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            category,
            body,
            tags,
            cover_image_url,
            published: false,
            canvas_elements: Vec::new(),
        }
    }

    /// ID as string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data
    pub fn update(&mut self, dto: &KnowledgeItemDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.category = dto.category.clone();
        self.body = dto.body.clone();
        self.tags = dto.tags.clone();
        self.cover_image_url = dto.cover_image_url.clone();
        self.published = dto.published;
        if let Some(elements) = &dto.canvas_elements {
            self.canvas_elements = elements.clone();
        }
    }
}

impl AggregateRoot for KnowledgeItem {
    type Id = KnowledgeItemId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "k001"
    }

    fn collection_name() -> &'static str {
        "knowledge_item"
    }

    fn element_name() -> &'static str {
        "Knowledge item"
    }

    fn list_name() -> &'static str {
        "Knowledge items"
    }

    fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code must not be empty".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category must not be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a knowledge item
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KnowledgeItemDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "coverImageUrl")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    /// `None` leaves the stored canvas untouched
    #[serde(rename = "canvasElements")]
    pub canvas_elements: Option<Vec<CanvasElement>>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> KnowledgeItem {
        KnowledgeItem::new_for_insert(
            "KB-001".into(),
            "Lean canvas basics".into(),
            "methodology".into(),
            "# Intro".into(),
            vec!["lean".into()],
            None,
            None,
        )
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut it = item();
        it.base.description = "  ".into();
        assert!(it.validate().is_err());
    }

    #[test]
    fn update_keeps_canvas_when_dto_omits_it() {
        let mut it = item();
        it.canvas_elements = vec![CanvasElement::new("bmc")];

        let dto = KnowledgeItemDto {
            description: "Updated".into(),
            category: "methodology".into(),
            body: String::new(),
            ..Default::default()
        };
        it.update(&dto);

        assert_eq!(it.base.description, "Updated");
        assert_eq!(it.canvas_elements.len(), 1);
    }
}
