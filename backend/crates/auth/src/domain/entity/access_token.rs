//! Access Token Entity
//!
//! Server-side record of an issued bearer token. Revocation is deletion;
//! tokens have no expiry.

use chrono::{DateTime, Utc};
use kernel::id::{AccessTokenId, UserId};

use crate::domain::value_object::token_secret::TokenSecret;

/// Access token entity
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token_id: AccessTokenId,
    pub user_id: UserId,
    /// Label given at issue time
    pub name: String,
    /// SHA-256 of the plain-text secret
    pub token_hash: [u8; 32],
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create the record for a freshly generated secret
    pub fn new(user_id: UserId, name: impl Into<String>, secret: &TokenSecret) -> Self {
        Self {
            token_id: AccessTokenId::new(),
            user_id,
            name: name.into(),
            token_hash: secret.digest(),
            created_at: Utc::now(),
            last_used_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stores_digest_not_secret() {
        let secret = TokenSecret::generate(32);
        let token = AccessToken::new(UserId::new(), "auth_token", &secret);
        assert_eq!(token.token_hash, secret.digest());
        assert_ne!(token.token_hash.as_slice(), secret.expose().as_bytes());
        assert!(token.last_used_at.is_none());
    }
}
