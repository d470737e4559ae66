//! Social domain service.
//!
//! The single authority for "may user U, holding role R, act on curriculum
//! C", and the only constructor of interaction entities. Application
//! services call through here before touching repositories.
//!
//! The owner-or-public predicate is written out once per action on purpose:
//! like, comment, and bookmark policy are identical today but free to
//! diverge without touching each other.

use std::sync::Arc;

use super::{Bookmark, Comment, CommentContent, Like, SocialError};
use crate::domain::foundation::{
    BookmarkId, CommentId, CurriculumId, DomainError, LikeId, Role, Timestamp, UserId,
};
use crate::ports::{BookmarkRepository, CurriculumReader, IdGenerator, LikeRepository};

/// Cross-entity authorization and creation logic for social interactions.
pub struct SocialDomainService {
    curriculum_reader: Arc<dyn CurriculumReader>,
    like_repository: Arc<dyn LikeRepository>,
    bookmark_repository: Arc<dyn BookmarkRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl SocialDomainService {
    pub fn new(
        curriculum_reader: Arc<dyn CurriculumReader>,
        like_repository: Arc<dyn LikeRepository>,
        bookmark_repository: Arc<dyn BookmarkRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            curriculum_reader,
            like_repository,
            bookmark_repository,
            id_generator,
        }
    }

    /// The caller's user id is passed to the reader only for non-admins,
    /// so the reader's own visibility filter stays out of the admin path.
    fn owner_filter<'a>(user_id: &'a UserId, role: Role) -> Option<&'a UserId> {
        if role.is_admin() {
            None
        } else {
            Some(user_id)
        }
    }

    // =========================================================================
    // Access predicates
    // =========================================================================

    /// May the user read or act on the curriculum at all?
    ///
    /// True iff the role is admin, the user owns the curriculum, or the
    /// curriculum is public. False when the curriculum is not found.
    pub async fn can_access_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
        role: Role,
    ) -> Result<bool, DomainError> {
        let curriculum = self
            .curriculum_reader
            .find_by_id(curriculum_id, role, Self::owner_filter(user_id, role))
            .await?;
        let Some(curriculum) = curriculum else {
            return Ok(false);
        };
        Ok(role.is_admin() || curriculum.is_owned_by(user_id) || curriculum.is_public())
    }

    /// May the user comment on the curriculum?
    pub async fn can_comment_on_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
        role: Role,
    ) -> Result<bool, DomainError> {
        let curriculum = self
            .curriculum_reader
            .find_by_id(curriculum_id, role, Self::owner_filter(user_id, role))
            .await?;
        let Some(curriculum) = curriculum else {
            return Ok(false);
        };
        Ok(role.is_admin() || curriculum.is_owned_by(user_id) || curriculum.is_public())
    }

    /// May the user like the curriculum?
    pub async fn can_like_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
        role: Role,
    ) -> Result<bool, DomainError> {
        let curriculum = self
            .curriculum_reader
            .find_by_id(curriculum_id, role, Self::owner_filter(user_id, role))
            .await?;
        let Some(curriculum) = curriculum else {
            return Ok(false);
        };
        Ok(role.is_admin() || curriculum.is_owned_by(user_id) || curriculum.is_public())
    }

    /// May the user bookmark the curriculum?
    pub async fn can_bookmark_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
        role: Role,
    ) -> Result<bool, DomainError> {
        let curriculum = self
            .curriculum_reader
            .find_by_id(curriculum_id, role, Self::owner_filter(user_id, role))
            .await?;
        let Some(curriculum) = curriculum else {
            return Ok(false);
        };
        Ok(role.is_admin() || curriculum.is_owned_by(user_id) || curriculum.is_public())
    }

    // =========================================================================
    // Creation validation
    // =========================================================================

    /// False when a like already exists for the pair or the curriculum is
    /// not likeable by this user. Callers that need to distinguish the two
    /// causes re-query existence; under concurrency the repository's
    /// uniqueness constraint remains the authoritative duplicate signal.
    pub async fn validate_like_creation(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
        role: Role,
    ) -> Result<bool, DomainError> {
        if self
            .like_repository
            .exists_by_curriculum_and_user(curriculum_id, user_id)
            .await?
        {
            return Ok(false);
        }
        self.can_like_curriculum(curriculum_id, user_id, role).await
    }

    /// Bookmark twin of `validate_like_creation`.
    pub async fn validate_bookmark_creation(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
        role: Role,
    ) -> Result<bool, DomainError> {
        if self
            .bookmark_repository
            .exists_by_curriculum_and_user(curriculum_id, user_id)
            .await?
        {
            return Ok(false);
        }
        self.can_bookmark_curriculum(curriculum_id, user_id, role)
            .await
    }

    /// May the user modify (edit or delete) the comment?
    ///
    /// True iff the role is admin or the user authored the comment.
    pub fn can_modify_comment(&self, comment: &Comment, user_id: &UserId, role: Role) -> bool {
        role.is_admin() || comment.is_authored_by(user_id)
    }

    // =========================================================================
    // Entity construction
    // =========================================================================

    /// Constructs a like with a fresh id.
    ///
    /// Pure construction; authorization and uniqueness are the caller's
    /// responsibility via the predicates above.
    pub fn create_like(
        &self,
        curriculum_id: CurriculumId,
        user_id: UserId,
        created_at: Option<Timestamp>,
    ) -> Result<Like, SocialError> {
        let id = LikeId::new(self.id_generator.generate())
            .map_err(|e| SocialError::infrastructure(e.to_string()))?;
        Ok(Like::new(
            id,
            curriculum_id,
            user_id,
            created_at.unwrap_or_default(),
        ))
    }

    /// Constructs a comment with a fresh id, validating the raw content.
    ///
    /// # Errors
    ///
    /// - `InvalidContent` when the content fails length validation
    pub fn create_comment(
        &self,
        curriculum_id: CurriculumId,
        user_id: UserId,
        raw_content: &str,
        created_at: Option<Timestamp>,
    ) -> Result<Comment, SocialError> {
        let content = CommentContent::new(raw_content).map_err(SocialError::invalid_content)?;
        let id = CommentId::new(self.id_generator.generate())
            .map_err(|e| SocialError::infrastructure(e.to_string()))?;
        Ok(Comment::new(
            id,
            curriculum_id,
            user_id,
            content,
            created_at.unwrap_or_default(),
        ))
    }

    /// Constructs a bookmark with a fresh id.
    pub fn create_bookmark(
        &self,
        curriculum_id: CurriculumId,
        user_id: UserId,
        created_at: Option<Timestamp>,
    ) -> Result<Bookmark, SocialError> {
        let id = BookmarkId::new(self.id_generator.generate())
            .map_err(|e| SocialError::infrastructure(e.to_string()))?;
        Ok(Bookmark::new(
            id,
            curriculum_id,
            user_id,
            created_at.unwrap_or_default(),
        ))
    }
}
