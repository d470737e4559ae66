//! Like repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CurriculumId, DomainError, LikeId, PageRequest, UserId};
use crate::domain::social::Like;

/// Repository port for Like persistence.
///
/// Implementations must enforce a unique composite key on
/// (curriculum_id, user_id); that constraint, not any caller pre-check, is
/// the correctness guard against concurrent duplicate creation.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Save a new like.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` when the (curriculum_id, user_id) key is taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, like: &Like) -> Result<(), DomainError>;

    /// Find a like by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &LikeId) -> Result<Option<Like>, DomainError>;

    /// Find a like by its composite key. Returns `None` if not found.
    async fn find_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<Option<Like>, DomainError>;

    /// One page of a user's likes, newest-first, with the unpaginated total.
    async fn find_by_user(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Like>), DomainError>;

    /// One page of a curriculum's likes, newest-first, with the unpaginated total.
    async fn find_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Like>), DomainError>;

    /// Delete a like by ID.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no like has this ID
    async fn delete(&self, id: &LikeId) -> Result<(), DomainError>;

    /// Delete a like by composite key.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no like exists for the pair
    async fn delete_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<(), DomainError>;

    /// Count likes given by a user.
    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// Count likes on a curriculum.
    async fn count_by_curriculum(&self, curriculum_id: &CurriculumId)
        -> Result<u64, DomainError>;

    /// Check whether a like exists for the composite key.
    async fn exists_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<bool, DomainError>;
}
