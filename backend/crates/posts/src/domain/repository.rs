//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use kernel::pagination::PageRequest;

use crate::domain::entity::{
    owner::OwnerSummary,
    post::{Post, PostChanges},
};
use crate::error::PostsResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Persist a new post
    async fn create(&self, post: &Post) -> PostsResult<()>;

    /// Find a post by ID regardless of owner
    async fn find_by_id(&self, post_id: &PostId) -> PostsResult<Option<Post>>;

    /// One page of `owner`'s posts, newest first (`created_at` desc, then id
    /// desc), plus the owner's total post count
    async fn list_by_owner(
        &self,
        owner: &UserId,
        page: PageRequest,
    ) -> PostsResult<(Vec<Post>, u64)>;

    /// Apply `changes` if the post exists and belongs to `owner`
    ///
    /// The check and the write are one atomic step. `None` means the post
    /// was not there (or not owned) at write time.
    async fn update_owned(
        &self,
        post_id: &PostId,
        owner: &UserId,
        changes: PostChanges,
        now: DateTime<Utc>,
    ) -> PostsResult<Option<Post>>;

    /// Delete the post if it exists and belongs to `owner`
    async fn delete_owned(&self, post_id: &PostId, owner: &UserId) -> PostsResult<bool>;
}

/// Lookup of the public owner projection
#[trait_variant::make(OwnerDirectory: Send)]
pub trait LocalOwnerDirectory {
    async fn find_owner(&self, user_id: &UserId) -> PostsResult<Option<OwnerSummary>>;
}
