use super::repository;
use contracts::domain::common::AggregateRoot;
use contracts::domain::k002_event::{Event, EventDto};
use uuid::Uuid;

/// Create a new event
pub async fn create(dto: EventDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("EV-{}", Uuid::new_v4()));
    let mut aggregate = Event::new_for_insert(
        code,
        dto.description.clone(),
        dto.starts_at,
        dto.ends_at,
        dto.location.clone(),
        dto.registration_url.clone(),
        dto.comment.clone(),
    );
    aggregate.published = dto.published;

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing event
pub async fn update(dto: EventDto) -> anyhow::Result<()> {
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
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Event>> {
    repository::get_by_id(id).await
}

/// Full list for the admin screen
pub async fn list_all() -> anyhow::Result<Vec<Event>> {
    repository::list_all().await
}

/// Published events for listings
pub async fn list_published() -> anyhow::Result<Vec<Event>> {
    repository::list_published().await
}
