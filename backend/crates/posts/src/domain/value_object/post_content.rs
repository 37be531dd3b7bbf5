//! Post Content Value Object
//!
//! 本文。空白のみは不可、長さの上限なし。

use serde::Serialize;
use std::fmt;

/// Content was empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContent;

impl fmt::Display for EmptyContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Content cannot be empty")
    }
}

impl std::error::Error for EmptyContent {}

/// Validated post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(input: impl AsRef<str>) -> Result<Self, EmptyContent> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmptyContent);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_db(content: impl Into<String>) -> Self {
        Self(content.into())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_length() {
        assert!(PostContent::new("x".repeat(100_000)).is_ok());
    }

    #[test]
    fn test_blank() {
        assert_eq!(PostContent::new("\n\t "), Err(EmptyContent));
    }
}
