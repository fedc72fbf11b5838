use crate::shared::api_utils::api_base;
use contracts::domain::k001_knowledge_item::{KnowledgeItem, KnowledgeItemDto};
use gloo_net::http::Request;

/// Fetch all knowledge items
pub async fn fetch_knowledge_items() -> Result<Vec<KnowledgeItem>, String> {
    let response = Request::get(&format!("{}/api/knowledge-item", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch items: {}", response.status()));
    }

    response
        .json::<Vec<KnowledgeItem>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one knowledge item by id
pub async fn fetch_knowledge_item(id: &str) -> Result<KnowledgeItem, String> {
    let response = Request::get(&format!("{}/api/knowledge-item/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch item: {}", response.status()));
    }

    response
        .json::<KnowledgeItem>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a knowledge item; returns the stored id
pub async fn upsert_knowledge_item(dto: KnowledgeItemDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/knowledge-item", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save item: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Soft-delete a knowledge item
pub async fn delete_knowledge_item(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/knowledge-item/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete item: {}", response.status()));
    }

    Ok(())
}
