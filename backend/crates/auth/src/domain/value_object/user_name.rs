//! User Name Value Object
//!
//! 表示名。空白のみは不可、前後の空白は除去、255 文字まで。
//! 一意性は要求しない（同名ユーザーは許容）。

use serde::Serialize;
use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 255;

/// Error returned when user name validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after trimming
    Empty,

    /// User name is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims() {
        assert_eq!(UserName::new("  Ann  ").unwrap().as_str(), "Ann");
    }

    #[test]
    fn test_empty() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
        assert_eq!(UserName::new(" \t "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_length_boundary() {
        assert!(UserName::new("あ".repeat(255)).is_ok());
        assert!(matches!(
            UserName::new("あ".repeat(256)),
            Err(UserNameError::TooLong { length: 256, max: 255 })
        ));
    }
}
