use axum::Json;

use crate::shared::recommendations;
use contracts::shared::recommendations::{RecommendationItem, RecommendationsQuery};

/// POST /api/recommendations
pub async fn list(
    Json(query): Json<RecommendationsQuery>,
) -> Result<Json<Vec<RecommendationItem>>, axum::http::StatusCode> {
    match recommendations::list(query).await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::warn!("recommendations query failed: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
