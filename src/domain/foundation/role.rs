//! User role for authorization decisions.
//!
//! The role is threaded explicitly through every authorization call rather
//! than read from ambient state, so each predicate spells out exactly which
//! caller it is deciding for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of platform roles.
///
/// Admins bypass ownership and visibility checks uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Returns true if this role bypasses ownership checks.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}
