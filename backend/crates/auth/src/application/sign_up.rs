//! Sign Up Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credentials::{CredentialStore, NewUserInput};
use crate::application::token_authority::TokenAuthority;
use crate::domain::entity::user::User;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::token_secret::TokenSecret;
use crate::error::AuthResult;

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
    pub token: TokenSecret,
}

/// Sign up use case
pub struct SignUpUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    credentials: CredentialStore<U>,
    tokens: TokenAuthority<T, U>,
}

impl<U, T> SignUpUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            credentials: CredentialStore::new(user_repo.clone(), config.clone()),
            tokens: TokenAuthority::new(token_repo, user_repo, config),
        }
    }

    pub async fn execute(&self, input: NewUserInput) -> AuthResult<SignUpOutput> {
        let user = self.credentials.create_user(input).await?;
        let token = self.tokens.issue(user.user_id).await?;

        tracing::info!(
            user_id = %user.user_id,
            "User signed up"
        );

        Ok(SignUpOutput { user, token })
    }
}
