//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::require_bearer_token;
pub use router::{auth_router, current_user_router};
