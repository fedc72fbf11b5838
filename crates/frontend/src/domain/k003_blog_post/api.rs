use crate::shared::api_utils::api_base;
use contracts::domain::k003_blog_post::{BlogPost, BlogPostDto};
use gloo_net::http::Request;

/// Fetch all blog posts
pub async fn fetch_blog_posts() -> Result<Vec<BlogPost>, String> {
    let response = Request::get(&format!("{}/api/blog-post", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch posts: {}", response.status()));
    }

    response
        .json::<Vec<BlogPost>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one blog post by id
pub async fn fetch_blog_post(id: &str) -> Result<BlogPost, String> {
    let response = Request::get(&format!("{}/api/blog-post/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch post: {}", response.status()));
    }

    response
        .json::<BlogPost>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a blog post; returns the stored id
pub async fn upsert_blog_post(dto: BlogPostDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/blog-post", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save post: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Soft-delete a blog post
pub async fn delete_blog_post(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/blog-post/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete post: {}", response.status()));
    }

    Ok(())
}
