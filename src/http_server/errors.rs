//! # HTTP Error Mapping
//!
//! Maps service errors onto HTTP status codes and a JSON error body.
//!
//! Status mapping:
//! - Validation  -> 400 Bad Request
//! - NotFound    -> 404 Not Found
//! - Conflict    -> 409 Conflict
//! - Busy        -> 503 Service Unavailable (retryable)
//! - Storage     -> 500 Internal Server Error

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::service::ServiceError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Service error carried to the HTTP boundary
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Busy => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.0.code(), "{}", self.0);
        }
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
            code: self.0.code(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_status_mapping_matches_taxonomy() {
        let cases = [
            (ServiceError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound(9), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("a@x.com".into()), StatusCode::CONFLICT),
            (ServiceError::Busy, StatusCode::SERVICE_UNAVAILABLE),
            (
                ServiceError::Storage(StoreError::malformed("/r.csv", "bad")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status_code(), status);
        }
    }
}
