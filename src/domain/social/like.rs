//! Like entity.
//!
//! At most one like exists per (curriculum_id, user_id) pair. That
//! uniqueness is enforced by the storage layer's composite key; the entity
//! itself only carries the identity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CurriculumId, LikeId, Timestamp, UserId};

/// A user's like on a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    id: LikeId,
    curriculum_id: CurriculumId,
    user_id: UserId,
    created_at: Timestamp,
}

impl Like {
    /// Creates a like. Called only through `SocialDomainService`.
    pub(crate) fn new(
        id: LikeId,
        curriculum_id: CurriculumId,
        user_id: UserId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            curriculum_id,
            user_id,
            created_at,
        }
    }

    /// Reconstitute a like from persistence.
    pub fn reconstitute(
        id: LikeId,
        curriculum_id: CurriculumId,
        user_id: UserId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            curriculum_id,
            user_id,
            created_at,
        }
    }

    /// Returns the like ID.
    pub fn id(&self) -> &LikeId {
        &self.id
    }

    /// Returns the liked curriculum's ID.
    pub fn curriculum_id(&self) -> &CurriculumId {
        &self.curriculum_id
    }

    /// Returns the liking user's ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns when the like was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks whether this like belongs to the given user.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
