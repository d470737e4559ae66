//! Tag and category value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum length for a category name.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 30;

/// Hex display color for a tag, normalized to `#rrggbb` lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagColor(String);

impl TagColor {
    /// Creates a tag color from a `#rrggbb` string.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let Some(hex) = raw.strip_prefix('#') else {
            return Err(ValidationError::invalid_format("tag_color", "missing '#'"));
        };
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                "tag_color",
                "expected six hex digits",
            ));
        }
        Ok(Self(format!("#{}", hex.to_ascii_lowercase())))
    }

    /// Returns the normalized `#rrggbb` value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated category name, trimmed, 1-30 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a category name from raw input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("category_name"));
        }
        let len = trimmed.chars().count();
        if len > MAX_CATEGORY_NAME_LENGTH {
            return Err(ValidationError::length_out_of_range(
                "category_name",
                1,
                MAX_CATEGORY_NAME_LENGTH,
                len,
            ));
        }
        Ok(Self(trimmed))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_color_normalizes_to_lowercase() {
        let color = TagColor::new("#FF8800").unwrap();
        assert_eq!(color.as_str(), "#ff8800");
    }

    #[test]
    fn tag_color_rejects_missing_hash() {
        assert!(TagColor::new("ff8800").is_err());
    }

    #[test]
    fn tag_color_rejects_wrong_length() {
        assert!(TagColor::new("#fff").is_err());
        assert!(TagColor::new("#ff88001").is_err());
    }

    #[test]
    fn tag_color_rejects_non_hex_digits() {
        assert!(TagColor::new("#ff88gg").is_err());
    }

    #[test]
    fn category_name_trims_and_accepts() {
        let name = CategoryName::new(" Programming ").unwrap();
        assert_eq!(name.as_str(), "Programming");
    }

    #[test]
    fn category_name_rejects_empty_and_overlong() {
        assert!(CategoryName::new("  ").is_err());
        assert!(CategoryName::new("x".repeat(31)).is_err());
    }
}
