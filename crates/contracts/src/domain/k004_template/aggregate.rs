use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::content_block::ContentBlock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a page template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub Uuid);

impl TemplateId {
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

impl AggregateId for TemplateId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TemplateId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Reusable page template: a named, prebuilt block sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    #[serde(flatten)]
    pub base: BaseAggregate<TemplateId>,

    /// Template kind ("landing", "article", "event-page", ...)
    pub kind: String,

    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl Template {
    /// Create a new template for insertion
    pub fn new_for_insert(
        code: String,
        description: String,
        kind: String,
        blocks: Vec<ContentBlock>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(TemplateId::new_v4(), code, description);
        base.comment = comment;

        Self { base, kind, blocks }
    }

    /// ID as string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data
    pub fn update(&mut self, dto: &TemplateDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.kind = dto.kind.clone();
        self.blocks = dto.blocks.clone();
    }
}

impl AggregateRoot for Template {
    type Id = TemplateId;

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
        "k004"
    }

    fn collection_name() -> &'static str {
        "template"
    }

    fn element_name() -> &'static str {
        "Template"
    }

    fn list_name() -> &'static str {
        "Templates"
    }

    fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.kind.trim().is_empty() {
            return Err("Kind must not be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a template
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub kind: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    pub comment: Option<String>,
}
