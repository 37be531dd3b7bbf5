//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, guard
//!
//! ## Features
//! - Sign up with name + email + password
//! - Sign in with email + password, returning an opaque bearer token
//! - Sign out revoking only the presented token
//! - Bearer-token guard producing an [`AuthContext`] for downstream handlers
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Tokens are 256 random bits; only their SHA-256 digest is stored
//! - Wrong password and unknown email are indistinguishable

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token_authority::AuthContext;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::handlers::AuthAppState;
pub use presentation::router::{auth_router, current_user_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
