//! Error conversions - From implementations for common error types
//!
//! Maps storage errors to [`AppError`] and renders [`AppError`] as the
//! failure envelope at the HTTP boundary.

#[cfg(feature = "sqlx")]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some("23505") => AppError::conflict("Duplicate key value"),
                    Some("23503") => AppError::conflict("Foreign key violation"),
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("53000" | "53100" | "53200" | "53300") => {
                        AppError::service_unavailable("Database resource exhausted")
                    }
                    Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        use crate::envelope::Envelope;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // 5xx の詳細はクライアントに返さない
        let message = if self.is_server_error() {
            self.kind().as_str().to_string()
        } else {
            self.message().to_string()
        };

        let body: Envelope<()> = Envelope::failure(message, self.field_errors().cloned());

        (status, Json(body)).into_response()
    }
}
