//! Booking eligibility engine

pub mod ports;
pub mod service;

pub use service::{BookingRequest, BookingService};
