//! Comment repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CommentId, CurriculumId, DomainError, PageRequest, UserId};
use crate::domain::social::Comment;

/// Repository port for Comment persistence.
///
/// Comments carry no composite-key uniqueness; a user may comment on the
/// same curriculum any number of times.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Save a new comment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, comment: &Comment) -> Result<(), DomainError>;

    /// Update an existing comment's content and updated_at.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the comment does not exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, comment: &Comment) -> Result<(), DomainError>;

    /// Find a comment by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, DomainError>;

    /// One page of a user's comments, newest-first, with the unpaginated total.
    async fn find_by_user(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Comment>), DomainError>;

    /// One page of a curriculum's comments, newest-first, with the unpaginated total.
    async fn find_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Comment>), DomainError>;

    /// Delete a comment by ID.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no comment has this ID
    async fn delete(&self, id: &CommentId) -> Result<(), DomainError>;

    /// Count comments written by a user.
    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// Count comments on a curriculum.
    async fn count_by_curriculum(&self, curriculum_id: &CurriculumId)
        -> Result<u64, DomainError>;
}
