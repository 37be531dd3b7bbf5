//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of sensitive data
//! - Constant-time comparison (inside argon2)
//! - Optional application-wide pepper
//!
//! Stored hashes are PHC strings, so verification reads the cost parameters
//! from the hash itself and older hashes keep verifying after a cost change.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// Cost parameters rejected by argon2
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),
}

// ============================================================================
// Cost parameters
// ============================================================================

/// Argon2id cost parameters used when hashing new passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl PasswordCost {
    /// Cheapest parameters argon2 accepts; for tests only
    pub const fn minimal() -> Self {
        Self {
            memory_kib: Params::MIN_M_COST,
            iterations: Params::MIN_T_COST,
            parallelism: Params::MIN_P_COST,
        }
    }

    fn hasher(&self) -> Result<Argon2<'static>, PasswordHashError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidParams(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for PasswordCost {
    /// OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("my_secure_password".to_string()).unwrap();
/// // Password is automatically zeroized when dropped
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password for registration
    ///
    /// - Not empty/whitespace only
    /// - At least [`MIN_PASSWORD_LENGTH`] Unicode code points
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = raw.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(raw))
    }

    /// Wrap a submitted password for verification only
    ///
    /// Sign-in must not reveal the registration policy, so no rules apply.
    pub fn for_verification(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut combined = self.as_bytes().to_vec();
        if let Some(p) = pepper {
            combined.extend_from_slice(p);
        }
        Zeroizing::new(combined)
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    /// * `cost` - Argon2id parameters for the new hash
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(
        &self,
        pepper: Option<&[u8]>,
        cost: PasswordCost,
    ) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);

        // Generate random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(&mut OsRng);

        let hash = cost
            .hasher()?
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, HashedPassword, PasswordCost};
///
/// let password = ClearTextPassword::new("my_secure_password".to_string()).unwrap();
/// let hashed = password.hash(None, PasswordCost::minimal()).unwrap();
///
/// // Later, verify
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // Validate it's a valid PHC string
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = password.peppered(pepper);

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Argon2 uses constant-time comparison internally
        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
