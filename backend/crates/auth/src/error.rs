//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::{FieldErrors, messages};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more request fields failed validation
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password (indistinguishable on purpose)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, malformed, unknown or revoked
    #[error("Unauthenticated.")]
    Unauthenticated,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::EmailTaken => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::Database(sqlx::Error::PoolTimedOut) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::EmailTaken => ErrorKind::UnprocessableEntity,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::ServiceUnavailable,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Validation(errors) => AppError::validation(errors),
            // Reported the same way a failed uniqueness rule is, under the field
            AuthError::EmailTaken => {
                let mut errors = FieldErrors::new();
                errors.add("email", messages::taken("email"));
                AppError::validation(errors)
            }
            AuthError::InvalidCredentials | AuthError::Unauthenticated => {
                AppError::unauthorized(self.to_string())
            }
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(_) => AppError::internal(self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<FieldErrors> for AuthError {
    fn from(errors: FieldErrors) -> Self {
        AuthError::Validation(errors)
    }
}
