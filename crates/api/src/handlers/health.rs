//! Liveness endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use gymbook_core::ServiceError;
use gymbook_domain::GymbookError;
use tokio::task;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /health`
///
/// Runs a trivial query against the pool so a wedged database shows up
/// here instead of on the first real request.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let db = Arc::clone(&state.db);
    task::spawn_blocking(move || db.health_check())
        .await
        .map_err(|e| {
            ApiError::from(ServiceError::from(GymbookError::Internal(format!(
                "health check task failed: {e}"
            ))))
        })?
        .map_err(|e| ApiError::from(ServiceError::from(e)))?;

    Ok(Json(HealthResponse { status: "ok", database: "ok" }))
}
