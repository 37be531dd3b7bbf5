//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    owner::OwnerSummary,
    post::{Post, PostChanges},
};
pub use repository::{OwnerDirectory, PostRepository};
