//! Activity query engine

pub mod ports;
pub mod service;

pub use service::{ActivityListRequest, ActivityPage, ActivityService};
