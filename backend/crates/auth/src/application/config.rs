//! Application Configuration
//!
//! Configuration for the Auth application layer.

pub use platform::password::PasswordCost;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Random bytes per bearer token (32 bytes = 256 bits)
    pub token_bytes_len: usize,
    /// Label recorded on every issued token
    pub token_name: String,
    /// Argon2id parameters for new password hashes
    pub password_cost: PasswordCost,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_pepper: None,
            token_bytes_len: 32,
            token_name: "auth_token".to_string(),
            password_cost: PasswordCost::default(),
        }
    }
}

impl AuthConfig {
    /// Set the application-wide pepper
    pub fn with_pepper(mut self, pepper: Vec<u8>) -> Self {
        self.password_pepper = Some(pepper);
        self
    }

    /// Cheapest hashing parameters, for test suites only
    pub fn for_tests() -> Self {
        Self {
            password_cost: PasswordCost::minimal(),
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
