//! Client overview and statistics aggregation

pub mod ports;
pub mod service;
pub mod statistics;

pub use service::{ClientOverview, ClientService};
