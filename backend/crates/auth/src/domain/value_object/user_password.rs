//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//! use platform::password::PasswordCost;
//!
//! let raw = RawPassword::new("MySecurePass123!".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None, PasswordCost::minimal()).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordCost, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password for registration (policy applied)
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }

    /// Wrap a sign-in attempt (no policy)
    pub fn submitted(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password
    pub fn from_raw(
        raw: &RawPassword,
        pepper: Option<&[u8]>,
        cost: PasswordCost,
    ) -> Result<Self, PasswordHashError> {
        raw.inner().hash(pepper, cost).map(Self)
    }

    /// Restore from the stored PHC string
    pub fn from_db(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("correct horse".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None, PasswordCost::minimal()).unwrap();

        assert!(hashed.verify(&RawPassword::submitted("correct horse".to_string()), None));
        assert!(!hashed.verify(&RawPassword::submitted("wrong horse".to_string()), None));
    }

    #[test]
    fn test_restore_from_db() {
        let raw = RawPassword::new("correct horse".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, Some(b"pepper"), PasswordCost::minimal()).unwrap();

        let restored = UserPassword::from_db(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, Some(b"pepper")));
        assert!(UserPassword::from_db("plain").is_err());
    }

    #[test]
    fn test_policy() {
        assert!(RawPassword::new("short".to_string()).is_err());
    }
}
