//! In-memory Post Repository
//!
//! Every method takes the map lock once, so the owner check and the write in
//! `update_owned`/`delete_owned` happen atomically.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use kernel::pagination::PageRequest;
use tokio::sync::RwLock;

use crate::domain::entity::post::{Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;

/// Memory-backed post repository (clones share state)
#[derive(Clone, Default)]
pub struct MemoryPostRepository {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl PostRepository for MemoryPostRepository {
    async fn create(&self, post: &Post) -> PostsResult<()> {
        self.posts.write().await.insert(post.post_id, post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostsResult<Option<Post>> {
        Ok(self.posts.read().await.get(post_id).cloned())
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
        page: PageRequest,
    ) -> PostsResult<(Vec<Post>, u64)> {
        let posts = self.posts.read().await;

        let mut owned: Vec<&Post> = posts.values().filter(|p| p.is_owned_by(owner)).collect();
        owned.sort_by_key(|p| (Reverse(p.created_at), Reverse(*p.post_id.as_uuid())));

        let total = owned.len() as u64;
        let items = owned
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn update_owned(
        &self,
        post_id: &PostId,
        owner: &UserId,
        changes: PostChanges,
        now: DateTime<Utc>,
    ) -> PostsResult<Option<Post>> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(post_id) {
            Some(post) if post.is_owned_by(owner) => {
                // No write when nothing differs from the stored values
                post.apply(changes, now);
                Ok(Some(post.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_owned(&self, post_id: &PostId, owner: &UserId) -> PostsResult<bool> {
        let mut posts = self.posts.write().await;
        if posts.get(post_id).is_some_and(|p| p.is_owned_by(owner)) {
            posts.remove(post_id);
            return Ok(true);
        }
        Ok(false)
    }
}
