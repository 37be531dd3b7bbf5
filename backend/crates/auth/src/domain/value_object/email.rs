//! Email Value Object
//!
//! Represents a syntactically valid email address.
//! Stored exactly as given (after trimming); comparisons are case-sensitive.

use serde::Serialize;
use std::fmt;

/// Maximum email length in characters
pub const EMAIL_MAX_LENGTH: usize = 255;

/// Error returned when email validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    Empty,
    TooLong,
    InvalidFormat,
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = email.as_ref().trim();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong);
        }

        if !Self::is_valid_format(email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email.to_string()))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        // Must contain exactly one @
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        // Local part checks
        if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
            return false;
        }

        // Domain checks
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        // Check domain has valid characters
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Domain shouldn't start or end with dot or hyphen
        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }

        !domain.contains("..")
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert_eq!(Email::new(""), Err(EmailError::Empty));
        assert_eq!(Email::new("   "), Err(EmailError::Empty));
        assert_eq!(Email::new("userexample.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@example"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("us er@example.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::new(email), Err(EmailError::TooLong));
    }

    #[test]
    fn test_email_preserves_case() {
        let email = Email::new("  Ann@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "Ann@Example.COM");
        assert_ne!(email, Email::new("ann@example.com").unwrap());
    }
}
