//! In-memory Repository Implementations
//!
//! Backs development runs without a database and the test suites. Each map
//! sits behind its own `RwLock`; every trait method takes the lock once, so
//! check-then-insert on the email index is atomic.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::{AccessTokenId, UserId};
use platform::crypto::constant_time_eq;
use tokio::sync::RwLock;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct UserTable {
    by_id: HashMap<UserId, User>,
    id_by_email: HashMap<String, UserId>,
}

/// Memory-backed auth repository (cheap to clone; clones share state)
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    users: Arc<RwLock<UserTable>>,
    tokens: Arc<RwLock<HashMap<AccessTokenId, AccessToken>>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tokens for a user
    pub async fn token_count(&self, user_id: &UserId) -> usize {
        self.tokens
            .read()
            .await
            .values()
            .filter(|t| &t.user_id == user_id)
            .count()
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut table = self.users.write().await;
        if table.id_by_email.contains_key(user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }
        table
            .id_by_email
            .insert(user.email.as_str().to_string(), user.user_id);
        table.by_id.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.by_id.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let table = self.users.read().await;
        Ok(table
            .id_by_email
            .get(email.as_str())
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }
}

// ============================================================================
// Access Token Repository Implementation
// ============================================================================

impl AccessTokenRepository for MemoryAuthRepository {
    async fn create(&self, token: &AccessToken) -> AuthResult<()> {
        self.tokens
            .write()
            .await
            .insert(token.token_id, token.clone());
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &[u8; 32]) -> AuthResult<Option<AccessToken>> {
        Ok(self
            .tokens
            .read()
            .await
            .values()
            .find(|t| constant_time_eq(&t.token_hash, token_hash))
            .cloned())
    }

    async fn touch_last_used(
        &self,
        token_id: &AccessTokenId,
        at: DateTime<Utc>,
    ) -> AuthResult<()> {
        if let Some(token) = self.tokens.write().await.get_mut(token_id) {
            token.last_used_at = Some(at);
        }
        Ok(())
    }

    async fn delete(&self, token_id: &AccessTokenId) -> AuthResult<bool> {
        Ok(self.tokens.write().await.remove(token_id).is_some())
    }
}
