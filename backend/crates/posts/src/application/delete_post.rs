//! Delete Post Use Case

use std::sync::Arc;

use auth::AuthContext;
use kernel::id::PostId;

use crate::domain::repository::PostRepository;
use crate::error::{OwnerAction, PostsError, PostsResult};

pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    posts: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// 404, then 403, then permanent removal
    pub async fn execute(&self, caller: &AuthContext, post_id: &PostId) -> PostsResult<()> {
        let caller_id = caller.user_id();

        let existing = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostsError::NotFound)?;
        if !existing.is_owned_by(&caller_id) {
            return Err(PostsError::NotOwner(OwnerAction::Delete));
        }

        if !self.posts.delete_owned(post_id, &caller_id).await? {
            return Err(PostsError::NotFound);
        }

        tracing::info!(
            post_id = %post_id,
            user_id = %caller_id,
            "Post deleted"
        );

        Ok(())
    }
}
