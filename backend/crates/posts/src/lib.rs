//! Posts Backend Module
//!
//! Personally-owned text posts behind the bearer-token guard.
//!
//! - `domain/` - Post entity, title/content value objects, repository traits
//! - `application/` - List/create/get/update/delete use cases
//! - `infra/` - Postgres and in-memory storage, owner directory
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access rules
//! - Listing only ever returns the caller's posts
//! - Any authenticated caller may read a single post by id
//! - Only the owner may update or delete; a non-owner gets 403 before the
//!   payload is validated

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::PostsConfig;
pub use error::{PostsError, PostsResult};
pub use infra::{memory::MemoryPostRepository, postgres::PgPostRepository};
pub use presentation::{PostsAppState, posts_router};
