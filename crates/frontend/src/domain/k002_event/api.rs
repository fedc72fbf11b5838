use crate::shared::api_utils::api_base;
use contracts::domain::k002_event::{Event, EventDto};
use gloo_net::http::Request;

/// Fetch all events
pub async fn fetch_events() -> Result<Vec<Event>, String> {
    let response = Request::get(&format!("{}/api/event", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch events: {}", response.status()));
    }

    response
        .json::<Vec<Event>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one event by id
pub async fn fetch_event(id: &str) -> Result<Event, String> {
    let response = Request::get(&format!("{}/api/event/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch event: {}", response.status()));
    }

    response
        .json::<Event>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update an event; returns the stored id
pub async fn upsert_event(dto: EventDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/event", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save event: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Soft-delete an event
pub async fn delete_event(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/event/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete event: {}", response.status()));
    }

    Ok(())
}
