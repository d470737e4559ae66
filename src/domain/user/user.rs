//! User record.
//!
//! Users are owned by the accounts subsystem; this core only needs their
//! identity, role, and display attributes for relationship checks.

use serde::{Deserialize, Serialize};

use super::values::{DisplayName, Email};
use crate::domain::foundation::{Role, Timestamp, UserId};

/// Platform user as seen by the social core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
    name: DisplayName,
    role: Role,
    created_at: Timestamp,
}

impl User {
    /// Creates a user record.
    pub fn new(id: UserId, email: Email, name: DisplayName, role: Role) -> Self {
        Self {
            id,
            email,
            name,
            role,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a user from persistence.
    pub fn reconstitute(
        id: UserId,
        email: Email,
        name: DisplayName,
        role: Role,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            name,
            role,
            created_at,
        }
    }

    /// Returns the user ID.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the display name.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Returns the platform role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns when the user was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Identity-based equality for relationship checks.
    pub fn is_same_user(&self, other_id: &UserId) -> bool {
        &self.id == other_id
    }
}
