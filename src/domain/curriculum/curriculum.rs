//! Curriculum projection.
//!
//! Curricula are owned by an external subsystem. The social core only sees
//! the projection returned by the `CurriculumReader` port: enough to answer
//! ownership and visibility questions, nothing more.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CurriculumId, UserId};

/// Visibility of a curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

/// Read-only view of a curriculum for authorization checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    id: CurriculumId,
    owner_id: UserId,
    title: String,
    visibility: Visibility,
}

impl Curriculum {
    /// Creates a curriculum projection.
    pub fn new(
        id: CurriculumId,
        owner_id: UserId,
        title: impl Into<String>,
        visibility: Visibility,
    ) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            visibility,
        }
    }

    /// Returns the curriculum ID.
    pub fn id(&self) -> &CurriculumId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Checks whether the given user owns this curriculum.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Checks whether the curriculum is publicly visible.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}
