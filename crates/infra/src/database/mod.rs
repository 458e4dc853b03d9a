//! SQLite persistence layer

pub mod activity_repository;
pub mod booking_repository;
pub mod client_repository;
pub mod manager;

use chrono::{DateTime, Utc};
use gymbook_domain::GymbookError;

/// Convert a stored unix timestamp back into a UTC instant.
pub(crate) fn timestamp_to_datetime(ts: i64) -> Result<DateTime<Utc>, GymbookError> {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .ok_or_else(|| GymbookError::Database(format!("timestamp {ts} out of range")))
}
