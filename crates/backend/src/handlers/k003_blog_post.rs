use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::k003_blog_post;

/// GET /api/blog-post
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::k003_blog_post::BlogPost>>, axum::http::StatusCode> {
    match k003_blog_post::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/blog-post/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::k003_blog_post::BlogPost>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match k003_blog_post::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/blog-post
pub async fn upsert(
    Json(dto): Json<contracts::domain::k003_blog_post::BlogPostDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if let Some(id) = dto.id.clone() {
        k003_blog_post::service::update(dto).await.map(|_| id)
    } else {
        k003_blog_post::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::warn!("blog post upsert failed: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/blog-post/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match k003_blog_post::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
