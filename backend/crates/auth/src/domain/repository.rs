//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::{AccessTokenId, UserId};

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Uniqueness of the email is checked in the same atomic step as the
    /// insert; a duplicate yields `AuthError::EmailTaken`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

/// Access token repository trait
#[trait_variant::make(AccessTokenRepository: Send)]
pub trait LocalAccessTokenRepository {
    /// Persist a newly issued token
    async fn create(&self, token: &AccessToken) -> AuthResult<()>;

    /// Find token by SHA-256 digest of its secret
    async fn find_by_hash(&self, token_hash: &[u8; 32]) -> AuthResult<Option<AccessToken>>;

    /// Record that the token was just used
    async fn touch_last_used(&self, token_id: &AccessTokenId, at: DateTime<Utc>)
    -> AuthResult<()>;

    /// Delete one token; `false` if it was already gone
    async fn delete(&self, token_id: &AccessTokenId) -> AuthResult<bool>;
}
