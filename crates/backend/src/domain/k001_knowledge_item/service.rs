use super::repository;
use contracts::domain::common::AggregateRoot;
use contracts::domain::k001_knowledge_item::{KnowledgeItem, KnowledgeItemDto};
use uuid::Uuid;

/// Create a new knowledge item
pub async fn create(dto: KnowledgeItemDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("KB-{}", Uuid::new_v4()));
    let mut aggregate = KnowledgeItem::new_for_insert(
        code,
        dto.description.clone(),
        dto.category.clone(),
        dto.body.clone(),
        dto.tags.clone(),
        dto.cover_image_url.clone(),
        dto.comment.clone(),
    );
    aggregate.published = dto.published;
    if let Some(elements) = dto.canvas_elements {
        aggregate.canvas_elements = elements;
    }

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing knowledge item
pub async fn update(dto: KnowledgeItemDto) -> anyhow::Result<()> {
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
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<KnowledgeItem>> {
    repository::get_by_id(id).await
}

/// Full list for the admin screen
pub async fn list_all() -> anyhow::Result<Vec<KnowledgeItem>> {
    repository::list_all().await
}

/// Published items for listings
pub async fn list_published() -> anyhow::Result<Vec<KnowledgeItem>> {
    repository::list_published().await
}
