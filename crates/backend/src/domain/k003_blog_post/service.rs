use super::repository;
use contracts::domain::common::AggregateRoot;
use contracts::domain::k003_blog_post::{BlogPost, BlogPostDto};
use uuid::Uuid;

/// Create a new blog post
pub async fn create(dto: BlogPostDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("BP-{}", Uuid::new_v4()));
    let mut aggregate = BlogPost::new_for_insert(
        code,
        dto.description.clone(),
        dto.slug.clone(),
        dto.body.clone(),
        dto.author.clone(),
        dto.comment.clone(),
    );
    aggregate.published_at = dto.published_at;

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing blog post
pub async fn update(dto: BlogPostDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

/// Soft delete
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Fetch one by ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<BlogPost>> {
    repository::get_by_id(id).await
}

/// Full list for the admin screen
pub async fn list_all() -> anyhow::Result<Vec<BlogPost>> {
    repository::list_all().await
}

/// Published posts for listings
pub async fn list_published() -> anyhow::Result<Vec<BlogPost>> {
    repository::list_published().await
}
