//! Error types used throughout the application
//!
//! Two tiers live here. [`GymbookError`] covers infrastructure and
//! configuration failures that surface to clients as code 99.
//! [`Rejection`] covers expected business-rule and validation outcomes,
//! each carrying the stable numeric code the HTTP layer must reproduce.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Gymbook infrastructure failures
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GymbookError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Gymbook operations
pub type Result<T> = std::result::Result<T, GymbookError>;

/// Error code for unclassified server failures.
pub const SERVER_ERROR_CODE: u16 = 99;

/// Business-rule and validation rejections.
///
/// These are expected outcomes of normal operation, not failures: they are
/// returned to clients as HTTP 400 with a `{code, description}` body, never
/// retried and never logged above debug level. Codes and descriptions are
/// part of the public API contract and must stay stable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// 21 - booking request without an activity id
    #[error("activity_id is mandatory")]
    MissingActivityId,

    /// 22 - booking request without a client id
    #[error("client_id is mandatory")]
    MissingClientId,

    /// 21 - listing filter names an unknown activity type
    #[error("Invalid activity type. Must be one of: BodyPump, Spinning, Core")]
    InvalidTypeFilter,

    /// 22 - listing sort field other than `date`
    #[error("Invalid sort parameter. Must be: date")]
    InvalidSort,

    /// 23 - listing order other than `asc`/`desc`
    #[error("Invalid order parameter. Must be: asc or desc")]
    InvalidOrder,

    /// 31
    #[error("Activity not found")]
    ActivityNotFound,

    /// 32
    #[error("Client not found")]
    ClientNotFound,

    /// 41
    #[error("Activity is full, no free places available")]
    ActivityFull,

    /// 42
    #[error("Client already booked this activity")]
    AlreadyBooked,

    /// 43
    #[error("Standard users cannot book more than 2 activities per week")]
    WeeklyLimitExceeded,

    /// 44 - client lookup endpoint variant of "not found"
    #[error("Client not found")]
    UnknownClient,
}

impl Rejection {
    /// Stable numeric code exposed on the wire.
    pub fn code(self) -> u16 {
        match self {
            Self::MissingActivityId | Self::InvalidTypeFilter => 21,
            Self::MissingClientId | Self::InvalidSort => 22,
            Self::InvalidOrder => 23,
            Self::ActivityNotFound => 31,
            Self::ClientNotFound => 32,
            Self::ActivityFull => 41,
            Self::AlreadyBooked => 42,
            Self::WeeklyLimitExceeded => 43,
            Self::UnknownClient => 44,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_codes_are_stable() {
        assert_eq!(Rejection::MissingActivityId.code(), 21);
        assert_eq!(Rejection::InvalidTypeFilter.code(), 21);
        assert_eq!(Rejection::MissingClientId.code(), 22);
        assert_eq!(Rejection::InvalidSort.code(), 22);
        assert_eq!(Rejection::InvalidOrder.code(), 23);
        assert_eq!(Rejection::ActivityNotFound.code(), 31);
        assert_eq!(Rejection::ClientNotFound.code(), 32);
        assert_eq!(Rejection::ActivityFull.code(), 41);
        assert_eq!(Rejection::AlreadyBooked.code(), 42);
        assert_eq!(Rejection::WeeklyLimitExceeded.code(), 43);
        assert_eq!(Rejection::UnknownClient.code(), 44);
    }

    #[test]
    fn rejection_descriptions_match_api_contract() {
        assert_eq!(Rejection::ActivityFull.to_string(), "Activity is full, no free places available");
        assert_eq!(Rejection::AlreadyBooked.to_string(), "Client already booked this activity");
        assert_eq!(
            Rejection::WeeklyLimitExceeded.to_string(),
            "Standard users cannot book more than 2 activities per week"
        );
        assert_eq!(Rejection::UnknownClient.to_string(), "Client not found");
    }
}
