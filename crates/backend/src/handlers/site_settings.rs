use axum::Json;

use crate::system::site_settings;
use contracts::system::site_settings::{SiteSettings, SiteSettingsDto};

/// GET /api/system/site-settings
pub async fn get() -> Result<Json<SiteSettings>, axum::http::StatusCode> {
    match site_settings::service::get().await {
        Ok(settings) => Ok(Json(settings)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PUT /api/system/site-settings
pub async fn update(
    Json(dto): Json<SiteSettingsDto>,
) -> Result<Json<SiteSettings>, axum::http::StatusCode> {
    match site_settings::service::update(dto).await {
        Ok(settings) => Ok(Json(settings)),
        Err(e) => {
            tracing::warn!("site settings update failed: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
