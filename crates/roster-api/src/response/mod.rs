//! Response types and error handling for API endpoints
//!
//! Every failure is rendered as `{"error": "...", "code": "..."}`. Server
//! errors are logged and never expose their detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_common::ErrorResponse;
use roster_service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};
use validator::{ValidationError, ValidationErrors};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{}", validation_message(.0))]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidPath(&'static str),

    #[error("Invalid request body")]
    InvalidBody,
}

/// Request DTOs report one schema-level error; its message is the response text
fn first_validation_error(errors: &ValidationErrors) -> Option<&ValidationError> {
    errors.field_errors().into_values().flatten().next()
}

fn validation_message(errors: &ValidationErrors) -> &str {
    first_validation_error(errors)
        .and_then(|e| e.message.as_deref())
        .unwrap_or("Validation failed")
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let from_u16 =
            |code: u16| StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            Self::Service(e) => from_u16(e.status_code()),
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidBody => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Validation(errors) => {
                first_validation_error(errors).map_or("VALIDATION_ERROR", |e| e.code.as_ref())
            }
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody => "INVALID_BODY",
        }
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: &'static str) -> Self {
        Self::InvalidPath(msg)
    }

    fn is_store_error(&self) -> bool {
        matches!(self, Self::Service(ServiceError::Domain(e)) if e.is_store())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
            ErrorResponse::internal()
        } else {
            if self.is_store_error() {
                warn!(error = %self, "Store rejected request");
            }
            ErrorResponse::new(self.to_string(), self.error_code())
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// Response for a panic caught by the middleware stack
pub fn panic_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal()),
    )
        .into_response()
}
