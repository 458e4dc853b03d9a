//! # Gymbook API
//!
//! HTTP layer of the booking service.
//!
//! This crate contains:
//! - The axum router and request handlers
//! - Response DTOs with the exact wire field names
//! - Error mapping from service results to `{code, description}` bodies
//!
//! ## Architecture
//! - Depends on `gymbook-core` services through [`AppState`]
//! - Contains no business rules; every decision lives in the core crate

use axum::routing::{get, post};
use axum::Router;

pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the complete axum router.
///
/// # Arguments
/// - `state`: Application state shared with the handlers
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(handlers::activities::list))
        .route("/bookings", post(handlers::bookings::create))
        .route("/clients/{id}", get(handlers::clients::show))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}
