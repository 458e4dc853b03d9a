//! # Gymbook Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The booking eligibility engine
//! - The activity query engine (filter / sort / paginate)
//! - The client overview and statistics aggregator
//! - Port interfaces (traits) implemented by the infrastructure layer
//!
//! ## Architecture Principles
//! - Only depends on `gymbook-domain`
//! - No database or HTTP code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod activity;
pub mod booking;
pub mod client;
pub mod error;

pub use activity::ports::{ActivityFilter, ActivityRepository, PageRequest, SortOrder};
pub use activity::{ActivityListRequest, ActivityPage, ActivityService};
pub use booking::ports::BookingRepository;
pub use booking::{BookingRequest, BookingService};
pub use client::ports::ClientRepository;
pub use client::{ClientOverview, ClientService};
pub use error::{ServiceError, ServiceResult};
