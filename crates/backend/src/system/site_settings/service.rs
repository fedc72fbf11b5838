use super::repository;
use contracts::system::site_settings::{SiteSettings, SiteSettingsDto};

/// Fetch the settings, writing the defaults on first read.
///
/// A fresh installation has no row yet; creating one here (rather than
/// at migration time) keeps the bootstrap idempotent.
pub async fn get() -> anyhow::Result<SiteSettings> {
    if let Some(settings) = repository::get().await? {
        return Ok(settings);
    }

    let defaults = SiteSettings::defaults();
    repository::insert(&defaults).await?;
    tracing::info!("site settings row created with defaults");
    Ok(defaults)
}

/// Apply a settings update
pub async fn update(dto: SiteSettingsDto) -> anyhow::Result<SiteSettings> {
    // Ensure the row exists before updating it
    let _ = get().await?;

    let settings = SiteSettings {
        site_title: dto.site_title,
        show_events: dto.show_events,
        show_knowledge: dto.show_knowledge,
        show_blog: dto.show_blog,
        updated_at: Some(chrono::Utc::now()),
    };
    repository::update(&settings).await?;
    Ok(settings)
}
