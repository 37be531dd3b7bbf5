//! Post Entity
//!
//! `nonexistent → created → {updated}* → deleted`. The owner is fixed at
//! creation and `updated_at` never moves backwards.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_object::{post_content::PostContent, post_title::PostTitle};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: PostId,
    /// Owner (set once, never reassigned)
    pub user_id: UserId,
    pub title: PostTitle,
    pub content: PostContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `owner`
    pub fn new(owner: UserId, title: PostTitle, content: PostContent) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            user_id: owner,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Apply a partial update at time `now`
    ///
    /// `updated_at` only moves when a member actually changes. Returns whether
    /// anything changed.
    pub fn apply(&mut self, changes: PostChanges, now: DateTime<Utc>) -> bool {
        let mut dirty = false;
        if let Some(title) = changes.title.filter(|t| *t != self.title) {
            self.title = title;
            dirty = true;
        }
        if let Some(content) = changes.content.filter(|c| *c != self.content) {
            self.content = content;
            dirty = true;
        }
        if dirty {
            self.updated_at = self.updated_at.max(now);
        }
        dirty
    }
}

/// Validated partial update; `None` leaves the member untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post() -> Post {
        Post::new(
            UserId::new(),
            PostTitle::new("Hello").unwrap(),
            PostContent::new("World").unwrap(),
        )
    }

    #[test]
    fn test_new_post_timestamps_match() {
        let post = post();
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_apply_partial() {
        let mut post = post();
        let now = post.updated_at + Duration::seconds(5);
        let changed = post.apply(
            PostChanges {
                title: Some(PostTitle::new("Renamed").unwrap()),
                content: None,
            },
            now,
        );

        assert!(changed);
        assert_eq!(post.title.as_str(), "Renamed");
        assert_eq!(post.content.as_str(), "World");
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn test_updated_at_never_goes_back() {
        let mut post = post();
        let before = post.updated_at;
        let changes = PostChanges {
            title: Some(PostTitle::new("Later").unwrap()),
            content: None,
        };
        assert!(post.apply(changes, before - Duration::seconds(30)));
        assert_eq!(post.updated_at, before);
    }

    #[test]
    fn test_empty_changes_keep_timestamp() {
        let mut post = post();
        let before = post.updated_at;
        assert!(!post.apply(PostChanges::default(), before + Duration::seconds(5)));
        assert_eq!(post.updated_at, before);
    }

    #[test]
    fn test_unchanged_values_keep_timestamp() {
        let mut post = post();
        let before = post.updated_at;
        let changes = PostChanges {
            title: Some(PostTitle::new("Hello").unwrap()),
            content: Some(PostContent::new("World").unwrap()),
        };
        assert!(!post.apply(changes, before + Duration::seconds(5)));
        assert_eq!(post.updated_at, before);
    }
}
