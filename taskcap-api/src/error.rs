/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers and gates return `Result<T, ApiError>` which automatically
/// converts to the appropriate status code with a `{"error": "<message>"}`
/// body.
///
/// Domain failures from the shared crate (`StoreError`, `QuotaError`)
/// convert into `ApiError` via `From`, so `?` works across the boundary.
///
/// Note: the wire contract maps duplicate usernames to 400, not 409, so
/// `ApiError::Conflict` answers with `BAD_REQUEST`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use taskcap_shared::quota::QuotaError;
use taskcap_shared::store::StoreError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input, e.g. a non-UUID todo id (400)
    Validation(String),

    /// Unknown username, user or todo (404)
    NotFound(String),

    /// Duplicate username (400 on the wire)
    Conflict(String),

    /// Pro plan already active (400)
    AlreadyPro(String),

    /// Free-plan todo cap reached (400)
    QuotaExceeded(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::AlreadyPro(msg) => write!(f, "Already pro: {}", msg),
            ApiError::QuotaExceeded(msg) => write!(f, "Quota exceeded: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::AlreadyPro(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::QuotaExceeded(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken => ApiError::Conflict(err.to_string()),
            StoreError::UnknownUsername(_)
            | StoreError::UserNotFound(_)
            | StoreError::TodoNotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::AlreadyPro => ApiError::AlreadyPro(err.to_string()),
        }
    }
}

/// Convert quota errors to API errors
impl From<QuotaError> for ApiError {
    fn from(err: QuotaError) -> Self {
        match err {
            QuotaError::LimitExceeded { .. } => ApiError::QuotaExceeded(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_display() {
        let err = ApiError::Validation("Id: 'abc' invalid.".to_string());
        assert_eq!(err.to_string(), "Validation failed: Id: 'abc' invalid.");

        let err = ApiError::NotFound("Username: 'ghost' not found.".to_string());
        assert_eq!(err.to_string(), "Not found: Username: 'ghost' not found.");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::NotFound("missing".to_string()),
                StatusCode::NOT_FOUND,
            ),
            // wire contract: duplicate username is 400
            (
                ApiError::Conflict("dup".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::AlreadyPro("pro".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::QuotaExceeded("cap".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::InternalError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_store_error_conversion() {
        let err: ApiError = StoreError::UsernameTaken.into();
        assert!(matches!(err, ApiError::Conflict(_)));

        let err: ApiError = StoreError::TodoNotFound(Uuid::nil()).into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = StoreError::AlreadyPro.into();
        assert!(matches!(err, ApiError::AlreadyPro(_)));
    }

    #[test]
    fn test_quota_error_conversion() {
        let err: ApiError = QuotaError::LimitExceeded {
            current: 10,
            limit: 10,
        }
        .into();

        match err {
            ApiError::QuotaExceeded(msg) => {
                assert_eq!(msg, "This user has exceeded the free plan limit.")
            }
            other => panic!("expected QuotaExceeded, got {:?}", other),
        }
    }
}
