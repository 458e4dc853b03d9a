//! Booking creation service - the eligibility rule engine
//!
//! The decision sequence is ordered: the first failing check determines
//! the error code, so reordering the checks would change observable
//! behaviour.

use std::sync::Arc;

use gymbook_domain::{week_bounds, Activity, Booking, GymbookError, Rejection};
use tracing::debug;

use super::ports::BookingRepository;
use crate::activity::ports::ActivityRepository;
use crate::client::ports::ClientRepository;
use crate::error::ServiceResult;

const STANDARD_USER_WEEKLY_LIMIT: u64 = 2;

/// Parsed booking request. `None` covers both an absent field and a zero
/// id, which the API treats as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingRequest {
    pub activity_id: Option<i64>,
    pub client_id: Option<i64>,
}

/// Booking creation service.
pub struct BookingService {
    activities: Arc<dyn ActivityRepository>,
    clients: Arc<dyn ClientRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(
        activities: Arc<dyn ActivityRepository>,
        clients: Arc<dyn ClientRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self { activities, clients, bookings }
    }

    /// Evaluate the eligibility rules and, if they all pass, persist the
    /// booking.
    ///
    /// Decision sequence (first failure wins):
    /// 1. `activity_id` present (21), `client_id` present (22)
    /// 2. activity exists (31), client exists (32)
    /// 3. activity has a free place (41)
    /// 4. client not already booked on this activity (42)
    /// 5. standard clients hold fewer than two bookings in the activity's
    ///    Monday-Sunday start week (43); premium clients are exempt
    ///
    /// The insert itself re-verifies capacity inside one transaction, so
    /// two concurrent requests cannot both take the last place; the loser
    /// gets the same activity-full rejection as step 3.
    ///
    /// Returns the booking together with the activity re-loaded after the
    /// insert, so its `clients_signed` reflects the new booking.
    pub async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> ServiceResult<(Booking, Activity)> {
        let activity_id = non_zero(request.activity_id).ok_or(Rejection::MissingActivityId)?;
        let client_id = non_zero(request.client_id).ok_or(Rejection::MissingClientId)?;

        let activity = self
            .activities
            .find_by_id(activity_id)
            .await?
            .ok_or(Rejection::ActivityNotFound)?;

        let client = self.clients.find_by_id(client_id).await?.ok_or(Rejection::ClientNotFound)?;

        if activity.is_full() {
            return Err(Rejection::ActivityFull.into());
        }

        if self.bookings.exists(activity_id, client_id).await? {
            return Err(Rejection::AlreadyBooked.into());
        }

        if client.is_standard() {
            let (monday, sunday) = week_bounds(activity.date_start);
            let bookings_this_week =
                self.bookings.count_for_client_between(client_id, monday, sunday).await?;

            if bookings_this_week >= STANDARD_USER_WEEKLY_LIMIT {
                debug!(client_id, bookings_this_week, "weekly limit reached");
                return Err(Rejection::WeeklyLimitExceeded.into());
            }
        }

        let booking = self
            .bookings
            .insert_if_free(activity_id, client_id)
            .await?
            .ok_or(Rejection::ActivityFull)?;

        // Re-load so clients_signed includes the booking just created.
        let activity = self.activities.find_by_id(activity_id).await?.ok_or_else(|| {
            GymbookError::Internal(format!("activity {activity_id} vanished after booking"))
        })?;

        debug!(booking_id = booking.id, activity_id, client_id, "booking created");
        Ok((booking, activity))
    }
}

fn non_zero(id: Option<i64>) -> Option<i64> {
    id.filter(|value| *value != 0)
}
