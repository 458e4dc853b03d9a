//! # Gymbook Domain
//!
//! Business domain types and models for Gymbook.
//!
//! This crate contains:
//! - Domain data types (Activity, Client, Booking, Song)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - The week-bucket utility used by the weekly booking limit
//!
//! ## Architecture
//! - No dependencies on other Gymbook crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::week::week_bounds;
