/*!
 * Backend Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers.
 *
 * # Error Categories
 *
 * - `ValidationError` - missing or malformed input (400)
 * - `ConflictError` - duplicate email or username (400)
 * - `AuthenticationError` - bad credentials (400) or missing/invalid token (401)
 * - `NotFound` - unknown campaign or route (404)
 * - `InternalError` - store, hashing or signing failure (500)
 *
 * Internal errors keep their source for server-side logging; the client only
 * ever sees a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;

/// Message returned for any registration uniqueness collision.
pub const ALREADY_IN_USE: &str = "Email or username already in use";

/// Message returned for an unknown email or a wrong password alike.
pub const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";

/// Message returned to clients for internal failures.
pub const SERVER_ERROR: &str = "Server error";

/// Backend-specific error types
///
/// Each variant maps to exactly one HTTP status through [`BackendError::status_code`].
///
/// # Usage
///
/// ```rust
/// use campaign_manager::backend::error::BackendError;
///
/// let err = BackendError::validation("All fields are required");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or malformed request input
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
    },

    /// Uniqueness collision on registration
    #[error("Conflict: {message}")]
    ConflictError {
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials or a missing/invalid session token
    ///
    /// Login failures use 400, gate rejections use 401.
    #[error("Authentication error: {message}")]
    AuthenticationError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Resource not found (or not owned by the caller)
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Store, hashing or signing failure
    ///
    /// The source is logged server-side and never sent to the client.
    #[error("Internal error: {0}")]
    InternalError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BackendError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a conflict error (400)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictError {
            message: message.into(),
        }
    }

    /// Login rejected: unknown email or wrong password (400)
    ///
    /// Both cases share one message so the response does not reveal which
    /// field was wrong.
    pub fn invalid_credentials() -> Self {
        Self::AuthenticationError {
            status: StatusCode::BAD_REQUEST,
            message: INCORRECT_CREDENTIALS.to_string(),
        }
    }

    /// Protected route rejected (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::AuthenticationError {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Wrap an internal failure (500)
    pub fn internal(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::InternalError(source.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError` - 400 Bad Request
    /// - `ConflictError` - 400 Bad Request
    /// - `AuthenticationError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `InternalError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::ConflictError { .. } => StatusCode::BAD_REQUEST,
            Self::AuthenticationError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::ConflictError { message }
            | Self::AuthenticationError { message, .. }
            | Self::NotFound { message } => message.clone(),
            Self::InternalError(_) => SERVER_ERROR.to_string(),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => Self::conflict(ALREADY_IN_USE),
            other => Self::internal(other),
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err)
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        Self::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = BackendError::validation("All fields are required");
        match error {
            BackendError::ValidationError { message } => {
                assert_eq!(message, "All fields are required");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::conflict("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::invalid_credentials().status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BackendError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let error = BackendError::internal("connection refused on 10.0.0.3");
        assert_eq!(error.message(), SERVER_ERROR);
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_store_conflict_becomes_conflict_error() {
        let error: BackendError = StoreError::Conflict.into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), ALREADY_IN_USE);
    }

    #[test]
    fn test_store_database_error_is_internal() {
        let error: BackendError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
