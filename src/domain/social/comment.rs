//! Comment entity.

use serde::{Deserialize, Serialize};

use super::content::CommentContent;
use crate::domain::foundation::{CommentId, CurriculumId, Timestamp, UserId};

/// A user's comment on a curriculum.
///
/// # Invariants
///
/// - `content` is always a valid `CommentContent`
/// - `updated_at` only advances when the content actually changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    curriculum_id: CurriculumId,
    user_id: UserId,
    content: CommentContent,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Comment {
    /// Creates a comment. Called only through `SocialDomainService`.
    pub(crate) fn new(
        id: CommentId,
        curriculum_id: CurriculumId,
        user_id: UserId,
        content: CommentContent,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            curriculum_id,
            user_id,
            content,
            created_at,
            updated_at: created_at,
        }
    }

    /// Reconstitute a comment from persistence.
    pub fn reconstitute(
        id: CommentId,
        curriculum_id: CurriculumId,
        user_id: UserId,
        content: CommentContent,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            curriculum_id,
            user_id,
            content,
            created_at,
            updated_at,
        }
    }

    /// Returns the comment ID.
    pub fn id(&self) -> &CommentId {
        &self.id
    }

    /// Returns the commented curriculum's ID.
    pub fn curriculum_id(&self) -> &CurriculumId {
        &self.curriculum_id
    }

    /// Returns the author's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the comment body.
    pub fn content(&self) -> &CommentContent {
        &self.content
    }

    /// Returns when the comment was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the content last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks whether this comment was written by the given user.
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Replaces the content, refreshing `updated_at`.
    ///
    /// Setting the current value is a no-op and leaves `updated_at`
    /// untouched. Returns whether anything changed.
    pub fn update_content(&mut self, content: CommentContent) -> bool {
        if self.content == content {
            return false;
        }
        self.content = content;
        self.updated_at = Timestamp::now();
        true
    }
}
