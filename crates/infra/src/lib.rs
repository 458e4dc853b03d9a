//! # Gymbook Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite repository implementations (rusqlite + r2d2 pool)
//! - Configuration loading (environment variables and config files)
//! - Seed fixtures for demo data
//!
//! ## Architecture
//! - Implements traits defined in `gymbook-core`
//! - Depends on `gymbook-domain` and `gymbook-core`
//! - Contains all "impure" code (I/O)

pub mod config;
pub mod database;
pub mod errors;
pub mod fixtures;

pub use database::activity_repository::SqlActivityRepository;
pub use database::booking_repository::SqlBookingRepository;
pub use database::client_repository::SqlClientRepository;
pub use database::manager::DbManager;
pub use errors::InfraError;
