//! Token Authority
//!
//! Issues, resolves and revokes opaque bearer tokens.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{AccessTokenId, UserId};

use crate::application::config::AuthConfig;
use crate::domain::entity::{access_token::AccessToken, user::AuthenticatedUser};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::token_secret::TokenSecret;
use crate::error::{AuthError, AuthResult};

/// Caller identity attached to a request by the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user: AuthenticatedUser,
    /// The token that authenticated this request
    pub token_id: AccessTokenId,
}

impl AuthContext {
    pub fn user_id(&self) -> UserId {
        self.user.user_id
    }
}

/// Token authority
pub struct TokenAuthority<T, U>
where
    T: AccessTokenRepository,
    U: UserRepository,
{
    token_repo: Arc<T>,
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<T, U> TokenAuthority<T, U>
where
    T: AccessTokenRepository + Send + Sync + 'static,
    U: UserRepository,
{
    pub fn new(token_repo: Arc<T>, user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            token_repo,
            user_repo,
            config,
        }
    }

    /// Mint a new token for `user_id`
    ///
    /// Existing tokens of the user stay valid.
    pub async fn issue(&self, user_id: UserId) -> AuthResult<TokenSecret> {
        let secret = TokenSecret::generate(self.config.token_bytes_len);
        let token = AccessToken::new(user_id, self.config.token_name.as_str(), &secret);

        self.token_repo.create(&token).await?;

        tracing::debug!(
            user_id = %user_id,
            token_id = %token.token_id,
            "Access token issued"
        );

        Ok(secret)
    }

    /// Resolve a presented secret to its owner
    ///
    /// Unknown and revoked tokens are indistinguishable. On success the
    /// token's `last_used_at` is refreshed in the background.
    pub async fn resolve(&self, secret: &TokenSecret) -> AuthResult<AuthContext> {
        let token = self
            .token_repo
            .find_by_hash(&secret.digest())
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        let user = self
            .user_repo
            .find_by_id(&token.user_id)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        let repo = Arc::clone(&self.token_repo);
        let token_id = token.token_id;
        tokio::spawn(async move {
            if let Err(e) = repo.touch_last_used(&token_id, Utc::now()).await {
                tracing::warn!(token_id = %token_id, error = %e, "Failed to record token use");
            }
        });

        Ok(AuthContext {
            user: user.summary(),
            token_id,
        })
    }

    /// Revoke exactly one token
    pub async fn revoke(&self, token_id: &AccessTokenId) -> AuthResult<()> {
        if !self.token_repo.delete(token_id).await? {
            return Err(AuthError::Unauthenticated);
        }
        Ok(())
    }
}
