//! Bookmark repository port.

use async_trait::async_trait;

use crate::domain::foundation::{BookmarkId, CurriculumId, DomainError, PageRequest, UserId};
use crate::domain::social::Bookmark;

/// Repository port for Bookmark persistence.
///
/// Same contract shape as `LikeRepository`, including the unique composite
/// key on (curriculum_id, user_id) as the duplicate-creation guard.
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Save a new bookmark.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` when the (curriculum_id, user_id) key is taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, bookmark: &Bookmark) -> Result<(), DomainError>;

    /// Find a bookmark by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, DomainError>;

    /// Find a bookmark by its composite key. Returns `None` if not found.
    async fn find_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<Option<Bookmark>, DomainError>;

    /// One page of a user's bookmarks, newest-first, with the unpaginated total.
    async fn find_by_user(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Bookmark>), DomainError>;

    /// One page of a curriculum's bookmarks, newest-first, with the unpaginated total.
    async fn find_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Bookmark>), DomainError>;

    /// Delete a bookmark by ID.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no bookmark has this ID
    async fn delete(&self, id: &BookmarkId) -> Result<(), DomainError>;

    /// Delete a bookmark by composite key.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no bookmark exists for the pair
    async fn delete_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<(), DomainError>;

    /// Count bookmarks made by a user.
    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// Count bookmarks on a curriculum.
    async fn count_by_curriculum(&self, curriculum_id: &CurriculumId)
        -> Result<u64, DomainError>;

    /// Check whether a bookmark exists for the composite key.
    async fn exists_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<bool, DomainError>;
}
