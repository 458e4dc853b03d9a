//! Activity listing endpoint.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use gymbook_core::ActivityListRequest;

use super::parse_flag;
use crate::dto::ActivityListResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /activities`
///
/// Query parameters: `onlyfree` (default true), `type`, `page`,
/// `page_size`, `sort`, `order`. Parameters arrive as raw strings;
/// validation and defaulting live in the service so unknown values get
/// their stable rejection codes instead of serde's 422.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ActivityListResponse>, ApiError> {
    let request = ActivityListRequest {
        only_free: params.get("onlyfree").map_or(true, |raw| parse_flag(raw)),
        activity_type: params.get("type").cloned(),
        page: params.get("page").map(|raw| raw.parse().unwrap_or(0)),
        page_size: params.get("page_size").map(|raw| raw.parse().unwrap_or(0)),
        sort: params.get("sort").cloned(),
        order: params.get("order").cloned(),
    };

    let page = state.activities.list(request).await?;
    Ok(Json(ActivityListResponse::from(&page)))
}
