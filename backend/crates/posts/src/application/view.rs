//! Post with its owner projection

use kernel::id::UserId;

use crate::domain::entity::{owner::OwnerSummary, post::Post};
use crate::domain::repository::OwnerDirectory;
use crate::error::{PostsError, PostsResult};

/// What the façade serializes for a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub post: Post,
    pub owner: OwnerSummary,
}

/// Owners are removed only together with their posts
pub(crate) async fn load_owner<O>(owners: &O, user_id: &UserId) -> PostsResult<OwnerSummary>
where
    O: OwnerDirectory,
{
    owners
        .find_owner(user_id)
        .await?
        .ok_or_else(|| PostsError::Internal(format!("Owner {user_id} missing")))
}
