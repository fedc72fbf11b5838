use crate::shared::api_utils::api_base;
use contracts::domain::k004_template::{Template, TemplateDto};
use gloo_net::http::Request;

/// Fetch all templates
pub async fn fetch_templates() -> Result<Vec<Template>, String> {
    let response = Request::get(&format!("{}/api/template", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch templates: {}", response.status()));
    }

    response
        .json::<Vec<Template>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a template; returns the stored id
pub async fn upsert_template(dto: TemplateDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/template", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save template: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Soft-delete a template
pub async fn delete_template(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/template/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete template: {}", response.status()));
    }

    Ok(())
}
