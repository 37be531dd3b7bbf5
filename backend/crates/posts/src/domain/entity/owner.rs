//! Owner projection attached to serialized posts

use kernel::id::UserId;

/// `{id, name, email}` of a post's owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}
