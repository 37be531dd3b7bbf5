//! Post Title Value Object
//!
//! 投稿タイトル。空白のみは不可、前後の空白は除去、255 文字まで。

use serde::Serialize;
use std::fmt;

/// Maximum length for a title (in characters)
pub const POST_TITLE_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTitleError {
    Empty,
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PostTitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Title cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Title is too long ({length} chars, maximum {max})")
            }
        }
    }
}

impl std::error::Error for PostTitleError {}

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(input: impl AsRef<str>) -> Result<Self, PostTitleError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PostTitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > POST_TITLE_MAX_LENGTH {
            return Err(PostTitleError::TooLong {
                length,
                max: POST_TITLE_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
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

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims() {
        assert_eq!(PostTitle::new("  Hello ").unwrap().as_str(), "Hello");
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(PostTitle::new("   "), Err(PostTitleError::Empty));
    }

    #[test]
    fn test_length_boundary() {
        assert!(PostTitle::new("t".repeat(255)).is_ok());
        assert_eq!(
            PostTitle::new("t".repeat(256)),
            Err(PostTitleError::TooLong {
                length: 256,
                max: 255
            })
        );
    }
}
