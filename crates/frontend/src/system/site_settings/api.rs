use crate::shared::api_utils::api_base;
use contracts::system::site_settings::{SiteSettings, SiteSettingsDto};
use gloo_net::http::Request;

/// Fetch the site settings
pub async fn fetch_site_settings() -> Result<SiteSettings, String> {
    let response = Request::get(&format!("{}/api/system/site-settings", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch settings: {}", response.status()));
    }

    response
        .json::<SiteSettings>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Save the site settings
pub async fn update_site_settings(dto: SiteSettingsDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/system/site-settings", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save settings: {}", response.status()));
    }

    Ok(())
}
