//! Domain data types
//!
//! Entities are plain data loaded by the persistence layer. Derived values
//! such as `clients_signed` are recomputed on every load and never stored.

pub mod activity;
pub mod booking;
pub mod client;
pub mod stats;

pub use activity::{Activity, ActivityType, Song};
pub use booking::{Booking, ClientBooking};
pub use client::{Client, ClientType};
pub use stats::{TypeEntry, TypeStatistics, YearStatistics};
