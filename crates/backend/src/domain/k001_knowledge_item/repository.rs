use chrono::Utc;
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::domain::k001_knowledge_item::{KnowledgeItem, KnowledgeItemId};
use contracts::shared::canvas::CanvasElement;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "k001_knowledge_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub category: String,
    pub body: String,
    /// JSON array of strings
    pub tags: String,
    pub cover_image_url: Option<String>,
    pub published: bool,
    /// JSON array of canvas elements
    pub canvas_elements: String,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for KnowledgeItem {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        let tags: Vec<String> = serde_json::from_str(&m.tags).unwrap_or_default();
        let canvas_elements: Vec<CanvasElement> =
            serde_json::from_str(&m.canvas_elements).unwrap_or_default();

        KnowledgeItem {
            base: BaseAggregate::with_metadata(
                KnowledgeItemId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            category: m.category,
            body: m.body,
            tags,
            cover_image_url: m.cover_image_url,
            published: m.published,
            canvas_elements,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active_model(aggregate: &KnowledgeItem) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.0.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        category: Set(aggregate.category.clone()),
        body: Set(aggregate.body.clone()),
        tags: Set(serde_json::to_string(&aggregate.tags)?),
        cover_image_url: Set(aggregate.cover_image_url.clone()),
        published: Set(aggregate.published),
        canvas_elements: Set(serde_json::to_string(&aggregate.canvas_elements)?),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<KnowledgeItem>> {
    let mut items: Vec<KnowledgeItem> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| {
        a.base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase())
    });
    Ok(items)
}

/// Published items only, newest first (for listings)
pub async fn list_published() -> anyhow::Result<Vec<KnowledgeItem>> {
    let mut items: Vec<KnowledgeItem> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Published.eq(true))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| b.base.metadata.created_at.cmp(&a.base.metadata.created_at));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<KnowledgeItem>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &KnowledgeItem) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.0;
    let active = to_active_model(aggregate)?;
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &KnowledgeItem) -> anyhow::Result<()> {
    let active = to_active_model(aggregate)?;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
