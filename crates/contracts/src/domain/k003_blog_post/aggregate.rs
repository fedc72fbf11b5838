use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlogPostId(pub Uuid);

impl BlogPostId {
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

impl AggregateId for BlogPostId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BlogPostId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Blog article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(flatten)]
    pub base: BaseAggregate<BlogPostId>,

    /// URL slug, unique across posts
    pub slug: String,

    /// Markdown body
    pub body: String,

    pub author: String,

    /// Set when the post goes public
    #[serde(rename = "publishedAt")]
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl BlogPost {
    /// Create a new blog post for insertion
    pub fn new_for_insert(
        code: String,
        description: String,
        slug: String,
        body: String,
        author: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(BlogPostId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            slug,
            body,
            author,
            published_at: None,
        }
    }

    /// ID as string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// Apply DTO data
    pub fn update(&mut self, dto: &BlogPostDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.slug = dto.slug.clone();
        self.body = dto.body.clone();
        self.author = dto.author.clone();
        self.published_at = dto.published_at;
    }
}

impl AggregateRoot for BlogPost {
    type Id = BlogPostId;

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
        "k003"
    }

    fn collection_name() -> &'static str {
        "blog_post"
    }

    fn element_name() -> &'static str {
        "Blog post"
    }

    fn list_name() -> &'static str {
        "Blog posts"
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

/// DTO for creating/updating a blog post
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BlogPostDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub slug: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_bad_slug() {
        let mut post = BlogPost::new_for_insert(
            "BP-001".into(),
            "Launch notes".into(),
            "Launch Notes".into(),
            String::new(),
            "editor".into(),
            None,
        );
        assert!(post.validate().is_err());

        post.slug = "launch-notes".into();
        assert!(post.validate().is_ok());
    }
}
