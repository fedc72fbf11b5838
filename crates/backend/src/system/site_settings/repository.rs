use contracts::system::site_settings::SiteSettings;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, Set};

use crate::shared::data::db::get_connection;

/// Fixed primary key: site settings are a singleton row
const SETTINGS_ROW_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sys_site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub site_title: String,
    pub show_events: Option<bool>,
    pub show_knowledge: Option<bool>,
    pub show_blog: Option<bool>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SiteSettings {
    fn from(m: Model) -> Self {
        SiteSettings {
            site_title: m.site_title,
            show_events: m.show_events,
            show_knowledge: m.show_knowledge,
            show_blog: m.show_blog,
            updated_at: m.updated_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get() -> anyhow::Result<Option<SiteSettings>> {
    let result = Entity::find_by_id(SETTINGS_ROW_ID).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(settings: &SiteSettings) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        site_title: Set(settings.site_title.clone()),
        show_events: Set(settings.show_events),
        show_knowledge: Set(settings.show_knowledge),
        show_blog: Set(settings.show_blog),
        updated_at: Set(settings.updated_at),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn update(settings: &SiteSettings) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        site_title: Set(settings.site_title.clone()),
        show_events: Set(settings.show_events),
        show_knowledge: Set(settings.show_knowledge),
        show_blog: Set(settings.show_blog),
        updated_at: Set(settings.updated_at),
    };
    active.update(conn()).await?;
    Ok(())
}
