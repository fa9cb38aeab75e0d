//! Directory statistics handler.

use std::time::Instant;

use axum::extract::State;
use axum::Json;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/stats - Provider counts by availability.
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let summary = state.provider_service.summary().await?;

    let stats = serde_json::json!({
        "total": summary.total(),
        "available": summary.available,
        "busy": summary.busy,
        "offline": summary.offline,
    });

    Ok(Json(
        ApiResponse::timed(stats, start).with_link("providers", "/api/v1/providers"),
    ))
}
