//! HTTP error responses for rejected service requests.
//!
//! Every [`ServiceError`] is a client error and maps to `400 Bad Request` with
//! a JSON body:
//!
//! ```json
//! {
//!   "error": "malformed_quad_key",
//!   "message": "Unable to interpret quad key \"0X\": ...",
//!   "status": 400
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::error::ServiceError;

/// JSON error response returned for all error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "missing_parameter")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: None,
        }
    }

    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

impl ServiceError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// The JSON body describing this error.
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::with_status(self.error_type(), self.to_string(), self.status_code())
    }
}

/// Convert ServiceError to HTTP response.
///
/// Rejections are logged at WARN level with the error type and status.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_error_response();

        warn!(
            error_type = body.error.as_str(),
            status = status.as_u16(),
            "Client error: {}",
            body.message
        );

        (status, Json(body)).into_response()
    }
}
