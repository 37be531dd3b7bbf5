//! Get Post Use Case
//!
//! Reads are not ownership-scoped: any authenticated caller may fetch any
//! post by id. Only update and delete check the owner.

use std::sync::Arc;

use kernel::id::PostId;

use crate::application::view::{PostView, load_owner};
use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::error::{PostsError, PostsResult};

pub struct GetPostUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    posts: Arc<P>,
    owners: Arc<O>,
}

impl<P, O> GetPostUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    pub fn new(posts: Arc<P>, owners: Arc<O>) -> Self {
        Self { posts, owners }
    }

    pub async fn execute(&self, post_id: &PostId) -> PostsResult<PostView> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostsError::NotFound)?;

        let owner = load_owner(self.owners.as_ref(), &post.user_id).await?;
        Ok(PostView { post, owner })
    }
}
