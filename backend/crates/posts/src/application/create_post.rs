//! Create Post Use Case

use std::sync::Arc;

use auth::AuthContext;

use crate::application::input::{NewPostInput, validate_new_post};
use crate::application::view::{PostView, load_owner};
use crate::domain::entity::post::Post;
use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::error::PostsResult;

pub struct CreatePostUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    posts: Arc<P>,
    owners: Arc<O>,
}

impl<P, O> CreatePostUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    pub fn new(posts: Arc<P>, owners: Arc<O>) -> Self {
        Self { posts, owners }
    }

    /// Nothing is stored unless every field is valid
    pub async fn execute(&self, caller: &AuthContext, input: NewPostInput) -> PostsResult<PostView> {
        let valid = validate_new_post(&input)?;

        let post = Post::new(caller.user_id(), valid.title, valid.content);
        self.posts.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            user_id = %post.user_id,
            "Post created"
        );

        let owner = load_owner(self.owners.as_ref(), &post.user_id).await?;
        Ok(PostView { post, owner })
    }
}
