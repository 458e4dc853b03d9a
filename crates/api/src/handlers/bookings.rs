//! Booking creation endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use gymbook_core::BookingRequest;
use serde::Deserialize;

use crate::dto::BookingResponse;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
struct BookingBody {
    activity_id: Option<i64>,
    client_id: Option<i64>,
}

/// `POST /bookings`
///
/// The body is parsed leniently: a malformed or non-JSON body is treated
/// as an empty one, so the caller gets the missing-field rejection (21)
/// rather than a framework-shaped parse error.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BookingResponse>, ApiError> {
    let body: BookingBody = serde_json::from_slice(&body).unwrap_or_default();

    let request = BookingRequest { activity_id: body.activity_id, client_id: body.client_id };
    let (booking, activity) = state.bookings.create_booking(request).await?;

    Ok(Json(BookingResponse::new(&booking, &activity)))
}
