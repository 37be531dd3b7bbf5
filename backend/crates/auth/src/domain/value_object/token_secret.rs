//! Plain-text bearer token
//!
//! The secret is handed to the client exactly once at issue time. Only its
//! SHA-256 digest is persisted, so a leaked table cannot be replayed.

use std::fmt;

use platform::crypto::{random_bytes, sha256, to_base64_url};

/// Opaque bearer secret as presented in `Authorization: Bearer <secret>`
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSecret(String);

impl TokenSecret {
    /// Generate a fresh secret from `len` OS-random bytes
    pub fn generate(len: usize) -> Self {
        Self(to_base64_url(&random_bytes(len)))
    }

    /// Wrap a secret received from a client
    pub fn presented(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Digest used as the storage and lookup key
    pub fn digest(&self) -> [u8; 32] {
        sha256(self.0.as_bytes())
    }

    /// Reveal the secret for the response body
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TokenSecret").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique_and_url_safe() {
        let a = TokenSecret::generate(32);
        let b = TokenSecret::generate(32);
        assert_ne!(a, b);
        assert_eq!(a.expose().len(), 43);
        assert!(
            a.expose()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_digest_is_stable() {
        let secret = TokenSecret::presented("abc");
        assert_eq!(secret.digest(), TokenSecret::presented("abc").digest());
        assert_ne!(secret.digest(), TokenSecret::presented("abd").digest());
    }

    #[test]
    fn test_debug_redaction() {
        let secret = TokenSecret::presented("super-secret");
        assert!(!format!("{secret:?}").contains("super-secret"));
    }
}
