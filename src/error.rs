//! Gateway error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Store-level detail is logged server-side and never included in the
//! response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid parameter `limit`: must be between 1 and 1000",
///     "details": "limit"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ApiError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details (the offending field for validation
    /// failures).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                  |
/// |-----------|------------|------------------------------|
/// | 1000–1999 | Validation | 422 Unprocessable Entity     |
/// | 2000–2999 | Not Found  | 404 Not Found                |
/// | 3000–3999 | Store      | 503 / 504 server-side errors |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A request parameter failed validation before any query was built.
    #[error("invalid parameter `{field}`: {message}")]
    Validation {
        /// Name of the offending parameter.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// Single-record lookup miss. Distinct from an empty listing result.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind, e.g. `"operator"`.
        resource: &'static str,
        /// The identifier that did not match any row.
        id: i64,
    },

    /// All pool connections are busy and the acquire timeout elapsed.
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// The backing store failed or is unreachable. The source error is
    /// logged, never serialized into the response.
    #[error("backing store unavailable")]
    StoreUnavailable(#[source] sqlx::Error),

    /// A single query exceeded its execution time bound.
    #[error("query timed out")]
    QueryTimeout,
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation { .. } => 1001,
            Self::NotFound { .. } => 2001,
            Self::PoolExhausted => 3001,
            Self::StoreUnavailable(_) => 3002,
            Self::QueryTimeout => 3003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::PoolExhausted | Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::QueryTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => Self::PoolExhausted,
            other => Self::StoreUnavailable(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            // Full detail (including the sqlx source) stays in the logs.
            tracing::error!(error = ?self, %status, "request failed");
        }
        let details = match &self {
            Self::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422() {
        let err = ApiError::Validation {
            field: "limit".to_string(),
            message: "must be between 1 and 1000".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound {
            resource: "operator",
            id: 42,
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
        assert_eq!(err.to_string(), "operator not found: 42");
    }

    #[test]
    fn pool_timeout_becomes_pool_exhausted() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, ApiError::PoolExhausted));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn store_error_display_leaks_no_detail() {
        let err = ApiError::from(sqlx::Error::WorkerCrashed);
        assert_eq!(err.to_string(), "backing store unavailable");
    }

    #[test]
    fn error_body_serializes_offending_field() {
        let err = ApiError::Validation {
            field: "skip".to_string(),
            message: "must be >= 0".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
