//! Comment content value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum length of comment content in characters, after trimming.
pub const MAX_CONTENT_LENGTH: usize = 1000;

/// Validated comment body: trimmed, 1-1000 characters.
///
/// Equality and hashing are by the normalized (trimmed) value, so contents
/// can serve as map keys or set elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentContent(String);

impl CommentContent {
    /// Creates comment content from raw input.
    ///
    /// # Errors
    ///
    /// - `EmptyField` when the trimmed value is empty
    /// - `LengthOutOfRange` when the trimmed value exceeds 1000 characters
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        let len = trimmed.chars().count();
        if len > MAX_CONTENT_LENGTH {
            return Err(ValidationError::length_out_of_range(
                "content",
                1,
                MAX_CONTENT_LENGTH,
                len,
            ));
        }
        Ok(Self(trimmed))
    }

    /// Returns the normalized content.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Content length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false; empty contents cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CommentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn content_round_trips_trimmed_value() {
        let content = CommentContent::new("  Great curriculum!  ").unwrap();
        assert_eq!(content.as_str(), "Great curriculum!");
    }

    #[test]
    fn content_rejects_whitespace_only() {
        assert!(matches!(
            CommentContent::new(" \t\n "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn content_accepts_exactly_max_length() {
        let raw = "x".repeat(MAX_CONTENT_LENGTH);
        assert!(CommentContent::new(raw).is_ok());
    }

    #[test]
    fn content_rejects_over_max_length() {
        let raw = "x".repeat(MAX_CONTENT_LENGTH + 1);
        assert!(matches!(
            CommentContent::new(raw),
            Err(ValidationError::LengthOutOfRange { .. })
        ));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let content = CommentContent::new("héllo").unwrap();
        assert_eq!(content.len(), 5);
    }

    #[test]
    fn equality_is_by_normalized_value() {
        let a = CommentContent::new("same text").unwrap();
        let b = CommentContent::new("  same text  ").unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    proptest! {
        #[test]
        fn valid_lengths_construct_and_round_trip(len in 1usize..=MAX_CONTENT_LENGTH) {
            let raw = "a".repeat(len);
            let content = CommentContent::new(raw.clone()).unwrap();
            prop_assert_eq!(content.as_str(), raw);
        }

        #[test]
        fn over_length_always_fails(extra in 1usize..100) {
            let raw = "a".repeat(MAX_CONTENT_LENGTH + extra);
            prop_assert!(CommentContent::new(raw).is_err());
        }

        #[test]
        fn surrounding_whitespace_never_affects_equality(
            body in "[a-z]{1,40}",
            pad in " {0,5}",
        ) {
            let padded = format!("{}{}{}", pad, body, pad);
            let a = CommentContent::new(body).unwrap();
            let b = CommentContent::new(padded).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
