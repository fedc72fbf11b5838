use crate::shared::api_utils::api_base;
use contracts::domain::k005_page::{Page, PageDto};
use gloo_net::http::Request;

/// Fetch all pages
pub async fn fetch_pages() -> Result<Vec<Page>, String> {
    let response = Request::get(&format!("{}/api/page", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch pages: {}", response.status()));
    }

    response
        .json::<Vec<Page>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one page by id
pub async fn fetch_page(id: &str) -> Result<Page, String> {
    let response = Request::get(&format!("{}/api/page/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch page: {}", response.status()));
    }

    response
        .json::<Page>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a page; returns the stored id
pub async fn upsert_page(dto: PageDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/page", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save page: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Soft-delete a page
pub async fn delete_page(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/page/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete page: {}", response.status()));
    }

    Ok(())
}
