//! Mapping from service results to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gymbook_core::ServiceError;
use gymbook_domain::SERVER_ERROR_CODE;
use tracing::error;

use crate::dto::ErrorBody;

/// Error type returned by every handler.
///
/// Business rejections keep their stable numeric codes and map to HTTP
/// 400. Infrastructure failures map to code 99 with HTTP 500; the
/// description carries the cause so operators can read it off the
/// response, matching the `Server error: ...` wording clients rely on.
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            ServiceError::Rejected(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorBody { code: rejection.code(), description: rejection.to_string() },
            ),
            ServiceError::Infra(err) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: SERVER_ERROR_CODE,
                        description: format!("Server error: {err}"),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
