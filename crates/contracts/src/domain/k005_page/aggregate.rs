use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::content_block::ContentBlock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a composed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub Uuid);

impl PageId {
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

impl AggregateId for PageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Composed page: an ordered block sequence published under a slug
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(flatten)]
    pub base: BaseAggregate<PageId>,

    /// URL slug, unique across pages
    pub slug: String,

    #[serde(default)]
    pub blocks: Vec<ContentBlock>,

    pub published: bool,
}

impl Page {
    /// Create a new page for insertion
    pub fn new_for_insert(
        code: String,
        description: String,
        slug: String,
        blocks: Vec<ContentBlock>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(PageId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            slug,
            blocks,
            published: false,
        }
    }

    /// ID as string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data
    pub fn update(&mut self, dto: &PageDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.slug = dto.slug.clone();
        self.blocks = dto.blocks.clone();
        self.published = dto.published;
    }
}

impl AggregateRoot for Page {
    type Id = PageId;

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
        "k005"
    }

    fn collection_name() -> &'static str {
        "page"
    }

    fn element_name() -> &'static str {
        "Page"
    }

    fn list_name() -> &'static str {
        "Pages"
    }

    fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Slug must not be empty".into());
        }
        if !self
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err("Slug may contain only lowercase letters, digits and dashes".into());
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub slug: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub published: bool,
    pub comment: Option<String>,
}
