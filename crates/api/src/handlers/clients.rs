//! Client overview endpoint.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;

use super::parse_flag;
use crate::dto::ClientResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /clients/{id}`
///
/// `with_bookings` and `with_statistics` (default false) opt in to the
/// upcoming-booking list and the per-year statistics. An unknown id is a
/// business rejection (44), not a bare 404.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ClientResponse>, ApiError> {
    let with_bookings = params.get("with_bookings").is_some_and(|raw| parse_flag(raw));
    let with_statistics = params.get("with_statistics").is_some_and(|raw| parse_flag(raw));

    let overview =
        state.clients.overview(id, with_bookings, with_statistics, Utc::now()).await?;

    Ok(Json(ClientResponse::from(overview)))
}
