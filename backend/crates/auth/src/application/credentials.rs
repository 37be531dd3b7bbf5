//! Credential Store
//!
//! Registers users and checks email/password pairs.
//!
//! Registration input is validated by a pure function that inspects every
//! field before anything touches storage, so the caller receives the whole
//! list of problems in one response.

use std::sync::Arc;

use kernel::validation::{FieldErrors, TextInput, messages};
use platform::password::{MIN_PASSWORD_LENGTH, PasswordPolicyError};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::{EMAIL_MAX_LENGTH, Email, EmailError},
    user_name::{USER_NAME_MAX_LENGTH, UserName, UserNameError},
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Registration input as received (every member may be missing)
#[derive(Debug, Default)]
pub struct NewUserInput {
    pub name: Option<TextInput>,
    pub email: Option<TextInput>,
    pub password: Option<TextInput>,
    pub password_confirmation: Option<TextInput>,
}

/// Registration input after validation
#[derive(Debug)]
pub struct ValidNewUser {
    pub name: UserName,
    pub email: Email,
    pub password: RawPassword,
}

/// Validate every registration field and collect every violation
pub fn validate_new_user(input: NewUserInput) -> Result<ValidNewUser, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match TextInput::check(input.name.as_ref(), "name", &mut errors)
        .map(|raw| raw.map(UserName::new))
    {
        None => None,
        Some(None | Some(Err(UserNameError::Empty))) => {
            errors.add("name", messages::required("name"));
            None
        }
        Some(Some(Err(UserNameError::TooLong { .. }))) => {
            errors.add("name", messages::max_chars("name", USER_NAME_MAX_LENGTH));
            None
        }
        Some(Some(Ok(name))) => Some(name),
    };

    let email = match TextInput::check(input.email.as_ref(), "email", &mut errors)
        .map(|raw| raw.map(Email::new))
    {
        None => None,
        Some(None | Some(Err(EmailError::Empty))) => {
            errors.add("email", messages::required("email"));
            None
        }
        Some(Some(Err(EmailError::InvalidFormat))) => {
            errors.add("email", messages::email("email"));
            None
        }
        Some(Some(Err(EmailError::TooLong))) => {
            errors.add("email", messages::max_chars("email", EMAIL_MAX_LENGTH));
            None
        }
        Some(Some(Ok(email))) => Some(email),
    };

    let password = match input.password {
        None => {
            errors.add("password", messages::required("password"));
            None
        }
        Some(TextInput::NotText) => {
            errors.add("password", messages::string("password"));
            None
        }
        Some(TextInput::Text(raw)) => {
            // Compared before the value moves into the zeroizing wrapper
            let confirmed = input
                .password_confirmation
                .as_ref()
                .and_then(TextInput::as_str)
                == Some(raw.as_str());
            let password = match RawPassword::new(raw) {
                Ok(password) => Some(password),
                Err(PasswordPolicyError::EmptyOrWhitespace) => {
                    errors.add("password", messages::required("password"));
                    None
                }
                Err(PasswordPolicyError::TooShort { .. }) => {
                    errors.add("password", messages::min_chars("password", MIN_PASSWORD_LENGTH));
                    None
                }
            };
            if password.is_some() && !confirmed {
                errors.add("password", messages::confirmed("password"));
            }
            password
        }
    };

    match (name, email, password) {
        (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(ValidNewUser {
            name,
            email,
            password,
        }),
        _ => Err(errors),
    }
}

/// Credential store
pub struct CredentialStore<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CredentialStore<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Validate, hash and persist a new user
    pub async fn create_user(&self, input: NewUserInput) -> AuthResult<User> {
        let valid = validate_new_user(input)?;

        // The insert re-checks atomically
        if self.user_repo.find_by_email(&valid.email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash =
            UserPassword::from_raw(&valid.password, self.config.pepper(), self.config.password_cost)
                .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(valid.name, valid.email, password_hash);
        self.user_repo.create(&user).await?;

        Ok(user)
    }

    /// Check an email/password pair
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn verify_credentials(&self, email: &str, password: RawPassword) -> AuthResult<User> {
        let Ok(email) = Email::new(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}
