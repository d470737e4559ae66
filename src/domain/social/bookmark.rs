//! Bookmark entity.
//!
//! Shares the Like shape: at most one bookmark per (curriculum_id, user_id)
//! pair, guarded by the storage layer's composite key.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookmarkId, CurriculumId, Timestamp, UserId};

/// A user's bookmark of a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    id: BookmarkId,
    curriculum_id: CurriculumId,
    user_id: UserId,
    created_at: Timestamp,
}

impl Bookmark {
    /// Creates a bookmark. Called only through `SocialDomainService`.
    pub(crate) fn new(
        id: BookmarkId,
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

    /// Reconstitute a bookmark from persistence.
    pub fn reconstitute(
        id: BookmarkId,
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

    /// Returns the bookmark ID.
    pub fn id(&self) -> &BookmarkId {
        &self.id
    }

    /// Returns the bookmarked curriculum's ID.
    pub fn curriculum_id(&self) -> &CurriculumId {
        &self.curriculum_id
    }

    /// Returns the bookmarking user's ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns when the bookmark was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks whether this bookmark belongs to the given user.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
