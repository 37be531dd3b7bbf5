//! Update Post Use Case
//!
//! Checks run in a fixed order: existence (404), ownership (403), then field
//! validation (422). A non-owner therefore gets 403 whatever the payload.

use std::sync::Arc;

use auth::AuthContext;
use chrono::Utc;
use kernel::id::PostId;

use crate::application::input::{PostPatchInput, validate_post_changes};
use crate::application::view::{PostView, load_owner};
use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::error::{OwnerAction, PostsError, PostsResult};

pub struct UpdatePostUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    posts: Arc<P>,
    owners: Arc<O>,
}

impl<P, O> UpdatePostUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    pub fn new(posts: Arc<P>, owners: Arc<O>) -> Self {
        Self { posts, owners }
    }

    pub async fn execute(
        &self,
        caller: &AuthContext,
        post_id: &PostId,
        input: PostPatchInput,
    ) -> PostsResult<PostView> {
        let caller_id = caller.user_id();

        let existing = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostsError::NotFound)?;
        if !existing.is_owned_by(&caller_id) {
            return Err(PostsError::NotOwner(OwnerAction::Update));
        }

        let changes = validate_post_changes(&input)?;

        // A concurrent delete between the read and this write surfaces as 404
        let post = self
            .posts
            .update_owned(post_id, &caller_id, changes, Utc::now())
            .await?
            .ok_or(PostsError::NotFound)?;

        tracing::info!(
            post_id = %post.post_id,
            user_id = %caller_id,
            "Post updated"
        );

        let owner = load_owner(self.owners.as_ref(), &post.user_id).await?;
        Ok(PostView { post, owner })
    }
}
