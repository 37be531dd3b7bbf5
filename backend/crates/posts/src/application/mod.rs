//! Application Layer
//!
//! Use cases for the post resource.

pub mod config;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod input;
pub mod list_posts;
pub mod update_post;
pub mod view;

// Re-exports
pub use config::PostsConfig;
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use get_post::GetPostUseCase;
pub use input::{NewPostInput, PostPatchInput};
pub use list_posts::ListPostsUseCase;
pub use update_post::UpdatePostUseCase;
pub use view::PostView;
