//! Port interfaces for booking persistence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gymbook_domain::{Booking, ClientBooking, Result};

/// Trait for persisting and querying bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Whether `client_id` already holds a booking for `activity_id`.
    async fn exists(&self, activity_id: i64, client_id: i64) -> Result<bool>;

    /// Count the client's bookings whose activity *start* falls in
    /// `[start, end]`, both bounds inclusive. Used for the weekly limit.
    async fn count_for_client_between(
        &self,
        client_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64>;

    /// All bookings of a client joined with their activities, in insertion
    /// order.
    async fn find_for_client(&self, client_id: i64) -> Result<Vec<ClientBooking>>;

    /// Insert a booking, re-verifying inside one transaction that the
    /// activity still has a free place. Returns `None` when capacity is
    /// gone at commit time, which callers map to an activity-full
    /// rejection. This is the serialization point that prevents
    /// overbooking under concurrent requests.
    async fn insert_if_free(&self, activity_id: i64, client_id: i64) -> Result<Option<Booking>>;
}
