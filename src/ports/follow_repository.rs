//! Follow repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FollowId, PageRequest, UserId};
use crate::domain::social::Follow;

/// Repository port for Follow persistence.
///
/// Implementations must enforce a unique composite key on the ordered
/// (follower_id, followee_id) pair.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Save a new follow.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` when the (follower_id, followee_id) key is taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, follow: &Follow) -> Result<(), DomainError>;

    /// Find a follow by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &FollowId) -> Result<Option<Follow>, DomainError>;

    /// Find a follow by its ordered pair. Returns `None` if not found.
    async fn find_by_users(
        &self,
        follower_id: &UserId,
        followee_id: &UserId,
    ) -> Result<Option<Follow>, DomainError>;

    /// One page of follows where the user is the followee (their followers),
    /// newest-first, with the unpaginated total.
    async fn find_followers(
        &self,
        followee_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Follow>), DomainError>;

    /// One page of follows where the user is the follower (who they follow),
    /// newest-first, with the unpaginated total.
    async fn find_following(
        &self,
        follower_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Follow>), DomainError>;

    /// Delete a follow by its ordered pair.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no follow exists for the pair
    async fn delete_by_users(
        &self,
        follower_id: &UserId,
        followee_id: &UserId,
    ) -> Result<(), DomainError>;

    /// Count followers of a user.
    async fn count_followers(&self, followee_id: &UserId) -> Result<u64, DomainError>;

    /// Count users a user follows.
    async fn count_following(&self, follower_id: &UserId) -> Result<u64, DomainError>;

    /// Check whether a follow exists for the ordered pair.
    async fn exists_by_users(
        &self,
        follower_id: &UserId,
        followee_id: &UserId,
    ) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn follow_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn FollowRepository) {}
    }
}
