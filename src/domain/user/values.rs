//! User-facing value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum length for a display name.
pub const MAX_NAME_LENGTH: usize = 50;

/// Minimum length for a raw password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length for a raw password.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Validated email address.
///
/// Format checking here is intentionally shallow (local part, one `@`,
/// dotted domain); deliverability is the mail provider's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates an email, rejecting malformed addresses.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        let Some((local, domain)) = raw.split_once('@') else {
            return Err(ValidationError::invalid_format("email", "missing '@'"));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(ValidationError::invalid_format(
                "email",
                "expected local@domain.tld",
            ));
        }
        if raw.contains(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "email",
                "whitespace not allowed",
            ));
        }
        Ok(Self(raw))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated display name, trimmed, 1-50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a display name from raw input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let len = trimmed.chars().count();
        if len > MAX_NAME_LENGTH {
            return Err(ValidationError::length_out_of_range(
                "name",
                1,
                MAX_NAME_LENGTH,
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

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw password accepted at registration time.
///
/// Only format rules live here. Hashing and verification belong to the
/// auth provider; the value is deliberately excluded from Debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Creates a password, enforcing length and character-class rules.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let len = raw.chars().count();
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
            return Err(ValidationError::length_out_of_range(
                "password",
                MIN_PASSWORD_LENGTH,
                MAX_PASSWORD_LENGTH,
                len,
            ));
        }
        let has_letter = raw.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = raw.chars().any(|c| c.is_ascii_digit());
        if !has_letter || !has_digit {
            return Err(ValidationError::invalid_format(
                "password",
                "must contain at least one letter and one digit",
            ));
        }
        Ok(Self(raw))
    }

    /// Exposes the raw value for handoff to the auth provider.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_address() {
        let email = Email::new("alice@example.com").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn email_trims_surrounding_whitespace() {
        let email = Email::new("  bob@example.org ").unwrap();
        assert_eq!(email.as_str(), "bob@example.org");
    }

    #[test]
    fn email_rejects_missing_at() {
        assert!(Email::new("not-an-email").is_err());
    }

    #[test]
    fn email_rejects_undotted_domain() {
        assert!(Email::new("alice@localhost").is_err());
    }

    #[test]
    fn email_rejects_empty() {
        assert!(matches!(
            Email::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn display_name_trims_and_accepts() {
        let name = DisplayName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn display_name_rejects_over_fifty_chars() {
        let raw = "a".repeat(51);
        assert!(matches!(
            DisplayName::new(raw),
            Err(ValidationError::LengthOutOfRange { .. })
        ));
    }

    #[test]
    fn password_requires_letter_and_digit() {
        assert!(Password::new("abcd1234").is_ok());
        assert!(Password::new("abcdefgh").is_err());
        assert!(Password::new("12345678").is_err());
    }

    #[test]
    fn password_rejects_short_values() {
        assert!(Password::new("ab1").is_err());
    }

    #[test]
    fn password_debug_redacts_value() {
        let password = Password::new("abcd1234").unwrap();
        assert_eq!(format!("{:?}", password), "Password(***)");
    }
}
