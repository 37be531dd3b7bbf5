//! User Entity
//!
//! Registered account. Immutable after creation.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Login identifier (unique, case-sensitive)
    pub email: Email,
    /// Argon2id hash
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: UserName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public projection (never carries the hash)
    pub fn summary(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: self.user_id,
            name: self.name.as_str().to_string(),
            email: self.email.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Identity of the caller as resolved from a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
