//! Posts Error Types
//!
//! Post-specific error variants that render through `kernel::error::AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::FieldErrors;
use thiserror::Error;

/// Posts result type alias
pub type PostsResult<T> = Result<T, PostsError>;

/// Mutation a non-owner attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerAction {
    Update,
    Delete,
}

impl OwnerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerAction::Update => "update",
            OwnerAction::Delete => "delete",
        }
    }
}

/// Posts error variants
#[derive(Debug, Error)]
pub enum PostsError {
    /// One or more request fields failed validation
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// No post with that id (or the id is not a UUID)
    #[error("Post not found")]
    NotFound,

    /// Caller is authenticated but does not own the post
    #[error("Unauthorized to {} this post", .0.as_str())]
    NotOwner(OwnerAction),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostsError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PostsError::Validation(_) => ErrorKind::UnprocessableEntity,
            PostsError::NotFound => ErrorKind::NotFound,
            PostsError::NotOwner(_) => ErrorKind::Forbidden,
            PostsError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::ServiceUnavailable,
            PostsError::Database(_) | PostsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            PostsError::Validation(errors) => AppError::validation(errors),
            PostsError::NotFound => AppError::not_found(self.to_string()),
            PostsError::NotOwner(_) => AppError::forbidden(self.to_string()),
            PostsError::Database(e) => AppError::from(e),
            PostsError::Internal(_) => AppError::internal(self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            PostsError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostsError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            PostsError::NotOwner(action) => {
                tracing::warn!(action = action.as_str(), "Post ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostsError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<FieldErrors> for PostsError {
    fn from(errors: FieldErrors) -> Self {
        PostsError::Validation(errors)
    }
}

impl From<AppError> for PostsError {
    fn from(err: AppError) -> Self {
        PostsError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PostsError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PostsError::NotOwner(OwnerAction::Update).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            PostsError::Validation(FieldErrors::new()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_forbidden_messages() {
        assert_eq!(
            PostsError::NotOwner(OwnerAction::Delete).into_app_error().kind(),
            ErrorKind::Forbidden
        );
        assert_eq!(
            PostsError::NotOwner(OwnerAction::Update).into_app_error().message(),
            "Unauthorized to update this post"
        );
        assert_eq!(
            PostsError::NotOwner(OwnerAction::Delete).into_app_error().message(),
            "Unauthorized to delete this post"
        );
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = PostsError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.into_app_error().kind(), ErrorKind::ServiceUnavailable);
    }
}
