//! Sign Out Use Case
//!
//! Revokes the token that authenticated the current request.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_authority::{AuthContext, TokenAuthority};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<T, U>
where
    T: AccessTokenRepository,
    U: UserRepository,
{
    tokens: TokenAuthority<T, U>,
}

impl<T, U> SignOutUseCase<T, U>
where
    T: AccessTokenRepository + Send + Sync + 'static,
    U: UserRepository,
{
    pub fn new(token_repo: Arc<T>, user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            tokens: TokenAuthority::new(token_repo, user_repo, config),
        }
    }

    /// Other tokens of the same user stay valid
    pub async fn execute(&self, context: &AuthContext) -> AuthResult<()> {
        self.tokens.revoke(&context.token_id).await?;

        tracing::info!(
            user_id = %context.user.user_id,
            token_id = %context.token_id,
            "Access token revoked"
        );
        Ok(())
    }
}
