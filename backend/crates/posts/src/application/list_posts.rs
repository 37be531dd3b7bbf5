//! List Posts Use Case

use std::sync::Arc;

use auth::AuthContext;
use kernel::pagination::{Page, PageRequest};

use crate::application::view::{PostView, load_owner};
use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::error::PostsResult;

/// Caller's own posts, newest first
pub struct ListPostsUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    posts: Arc<P>,
    owners: Arc<O>,
}

impl<P, O> ListPostsUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    pub fn new(posts: Arc<P>, owners: Arc<O>) -> Self {
        Self { posts, owners }
    }

    pub async fn execute(&self, caller: &AuthContext, page: PageRequest) -> PostsResult<Page<PostView>> {
        let owner_id = caller.user_id();
        let (posts, total) = self.posts.list_by_owner(&owner_id, page).await?;
        let owner = load_owner(self.owners.as_ref(), &owner_id).await?;

        Ok(Page::new(posts, page, total).map(|post| PostView {
            post,
            owner: owner.clone(),
        }))
    }
}
