//! Sign In Use Case
//!
//! Checks credentials and issues a new bearer token.

use std::sync::Arc;

use kernel::validation::{FieldErrors, TextInput, messages};

use crate::application::config::AuthConfig;
use crate::application::credentials::CredentialStore;
use crate::application::token_authority::TokenAuthority;
use crate::domain::entity::user::User;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{
    email::{Email, EmailError},
    token_secret::TokenSecret,
    user_password::RawPassword,
};
use crate::error::AuthResult;

/// Sign in input
#[derive(Debug, Default)]
pub struct SignInInput {
    pub email: Option<TextInput>,
    pub password: Option<TextInput>,
}

/// Sign in output
pub struct SignInOutput {
    pub user: User,
    pub token: TokenSecret,
}

/// Shape checks only; whether the pair matches is decided afterwards
fn validate(input: SignInInput) -> Result<(String, RawPassword), FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = match input.email {
        Some(TextInput::NotText) => {
            errors.add("email", messages::string("email"));
            None
        }
        Some(TextInput::Text(raw)) => match Email::new(&raw) {
            Ok(_) => Some(raw),
            Err(EmailError::Empty) => {
                errors.add("email", messages::required("email"));
                None
            }
            Err(_) => {
                errors.add("email", messages::email("email"));
                None
            }
        },
        None => {
            errors.add("email", messages::required("email"));
            None
        }
    };

    let password = match input.password {
        Some(TextInput::Text(raw)) if !raw.trim().is_empty() => Some(RawPassword::submitted(raw)),
        Some(TextInput::NotText) => {
            errors.add("password", messages::string("password"));
            None
        }
        _ => {
            errors.add("password", messages::required("password"));
            None
        }
    };

    match (email, password) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(errors),
    }
}

/// Sign in use case
pub struct SignInUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    credentials: CredentialStore<U>,
    tokens: TokenAuthority<T, U>,
}

impl<U, T> SignInUseCase<U, T>
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

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let (email, password) = validate(input)?;

        let user = self.credentials.verify_credentials(&email, password).await?;
        let token = self.tokens.issue(user.user_id).await?;

        tracing::info!(
            user_id = %user.user_id,
            "User signed in"
        );

        Ok(SignInOutput { user, token })
    }
}
