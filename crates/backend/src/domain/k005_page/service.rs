use super::repository;
use contracts::domain::common::AggregateRoot;
use contracts::domain::k005_page::{Page, PageDto};
use uuid::Uuid;

/// Create a new page
pub async fn create(dto: PageDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("PG-{}", Uuid::new_v4()));
    let mut aggregate = Page::new_for_insert(
        code,
        dto.description.clone(),
        dto.slug.clone(),
        dto.blocks.clone(),
        dto.comment.clone(),
    );
    aggregate.published = dto.published;

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    // Slugs are the public address of a page; refuse duplicates
    if let Some(existing) = repository::get_by_slug(&aggregate.slug).await? {
        if existing.base.id != aggregate.base.id {
            anyhow::bail!("Slug already in use: {}", aggregate.slug);
        }
    }

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing page
pub async fn update(dto: PageDto) -> anyhow::Result<()> {
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

    if let Some(existing) = repository::get_by_slug(&aggregate.slug).await? {
        if existing.base.id != aggregate.base.id {
            anyhow::bail!("Slug already in use: {}", aggregate.slug);
        }
    }

    aggregate.before_write();

    repository::update(&aggregate).await
}

/// Soft delete
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Fetch one by ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Page>> {
    repository::get_by_id(id).await
}

/// Fetch one by public slug
pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<Page>> {
    repository::get_by_slug(slug).await
}

/// Full list
pub async fn list_all() -> anyhow::Result<Vec<Page>> {
    repository::list_all().await
}
