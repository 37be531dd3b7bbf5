//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary shared by the
//! `auth` and `posts` crates:
//! - Common error types and result aliases
//! - Typed identifiers (`UserId`, `PostId`, `AccessTokenId`)
//! - Field-level validation errors
//! - The JSON response envelope and pagination primitives
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod envelope;
pub mod id;
pub mod pagination;
pub mod validation;

#[cfg(feature = "axum")]
pub mod extract;
