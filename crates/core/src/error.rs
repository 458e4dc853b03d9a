//! Service-level error type
//!
//! Separates expected business-rule rejections from infrastructure
//! failures so callers can map them to different HTTP semantics:
//! rejections become 400 responses with their stable code, infrastructure
//! errors become code 99.

use gymbook_domain::{GymbookError, Rejection};
use thiserror::Error;

/// Outcome of a core service call that can be rejected by business rules.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Expected business-rule or validation rejection
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// Unexpected infrastructure failure
    #[error(transparent)]
    Infra(#[from] GymbookError),
}

/// Result alias for core service operations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// The rejection carried by this error, if it is one.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            Self::Infra(_) => None,
        }
    }
}
