//! Bookings: the join entity between clients and activities

use serde::{Deserialize, Serialize};

use super::activity::Activity;

/// A reservation linking one client to one activity.
///
/// Carries no attributes beyond the two references; once created its
/// lifetime is independent (no update or delete operation is exposed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub activity_id: i64,
    pub client_id: i64,
}

/// A client's booking joined with its activity, as loaded for the client
/// overview and statistics aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientBooking {
    pub id: i64,
    pub client_id: i64,
    pub activity: Activity,
}
