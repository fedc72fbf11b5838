use super::repository;
use contracts::domain::common::AggregateRoot;
use contracts::domain::k004_template::{Template, TemplateDto};
use uuid::Uuid;

/// Create a new template
pub async fn create(dto: TemplateDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("TPL-{}", Uuid::new_v4()));
    let mut aggregate = Template::new_for_insert(
        code,
        dto.description.clone(),
        dto.kind.clone(),
        dto.blocks.clone(),
        dto.comment.clone(),
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing template
pub async fn update(dto: TemplateDto) -> anyhow::Result<()> {
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
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Template>> {
    repository::get_by_id(id).await
}

/// Full list
pub async fn list_all() -> anyhow::Result<Vec<Template>> {
    repository::list_all().await
}

/// Seed a couple of starter templates on an empty table
pub async fn insert_test_data() -> anyhow::Result<()> {
    use contracts::shared::content_block::{BlockKind, ContentBlock};

    if !repository::list_all().await?.is_empty() {
        return Ok(());
    }

    let landing = TemplateDto {
        description: "Landing page".into(),
        kind: "landing".into(),
        blocks: vec![
            ContentBlock::new(BlockKind::Image),
            ContentBlock::new(BlockKind::KnowledgeItemsList),
            ContentBlock::new(BlockKind::EventsList),
            ContentBlock::new(BlockKind::Recommendations),
        ],
        ..Default::default()
    };
    let article = TemplateDto {
        description: "Article page".into(),
        kind: "article".into(),
        blocks: vec![
            ContentBlock::new(BlockKind::Image),
            ContentBlock::new(BlockKind::Recommendations),
        ],
        ..Default::default()
    };

    create(landing).await?;
    create(article).await?;
    Ok(())
}
