//! In-memory follow repository for testing.
//!
//! Enforces uniqueness of the ordered (follower_id, followee_id) pair.
//! Testing only; methods panic on poisoned locks.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, FollowId, PageRequest, UserId};
use crate::domain::social::Follow;
use crate::ports::FollowRepository;

/// In-memory `FollowRepository` implementation.
pub struct InMemoryFollowRepository {
    follows: RwLock<Vec<Follow>>,
}

impl InMemoryFollowRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            follows: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored follows (for test assertions).
    pub fn len(&self) -> usize {
        self.follows.read().expect("follows lock poisoned").len()
    }

    /// True when no follows are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn page_of(mut matches: Vec<Follow>, page: &PageRequest) -> (u64, Vec<Follow>) {
        let total = matches.len() as u64;
        matches.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| b.id().cmp(a.id()))
        });
        let items = matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        (total, items)
    }
}

impl Default for InMemoryFollowRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn save(&self, follow: &Follow) -> Result<(), DomainError> {
        let mut follows = self.follows.write().expect("follows lock poisoned");
        if follows.iter().any(|f| {
            f.follower_id() == follow.follower_id() && f.followee_id() == follow.followee_id()
        }) {
            return Err(DomainError::already_exists(format!(
                "Follow for ({}, {})",
                follow.follower_id(),
                follow.followee_id()
            )));
        }
        follows.push(follow.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &FollowId) -> Result<Option<Follow>, DomainError> {
        let follows = self.follows.read().expect("follows lock poisoned");
        Ok(follows.iter().find(|f| f.id() == id).cloned())
    }

    async fn find_by_users(
        &self,
        follower_id: &UserId,
        followee_id: &UserId,
    ) -> Result<Option<Follow>, DomainError> {
        let follows = self.follows.read().expect("follows lock poisoned");
        Ok(follows
            .iter()
            .find(|f| f.follower_id() == follower_id && f.followee_id() == followee_id)
            .cloned())
    }

    async fn find_followers(
        &self,
        followee_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Follow>), DomainError> {
        let follows = self.follows.read().expect("follows lock poisoned");
        let matches = follows
            .iter()
            .filter(|f| f.followee_id() == followee_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn find_following(
        &self,
        follower_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Follow>), DomainError> {
        let follows = self.follows.read().expect("follows lock poisoned");
        let matches = follows
            .iter()
            .filter(|f| f.follower_id() == follower_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn delete_by_users(
        &self,
        follower_id: &UserId,
        followee_id: &UserId,
    ) -> Result<(), DomainError> {
        let mut follows = self.follows.write().expect("follows lock poisoned");
        let before = follows.len();
        follows.retain(|f| !(f.follower_id() == follower_id && f.followee_id() == followee_id));
        if follows.len() == before {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Follow not found for ({}, {})", follower_id, followee_id),
            ));
        }
        Ok(())
    }

    async fn count_followers(&self, followee_id: &UserId) -> Result<u64, DomainError> {
        let follows = self.follows.read().expect("follows lock poisoned");
        Ok(follows.iter().filter(|f| f.followee_id() == followee_id).count() as u64)
    }

    async fn count_following(&self, follower_id: &UserId) -> Result<u64, DomainError> {
        let follows = self.follows.read().expect("follows lock poisoned");
        Ok(follows.iter().filter(|f| f.follower_id() == follower_id).count() as u64)
    }

    async fn exists_by_users(
        &self,
        follower_id: &UserId,
        followee_id: &UserId,
    ) -> Result<bool, DomainError> {
        let follows = self.follows.read().expect("follows lock poisoned");
        Ok(follows
            .iter()
            .any(|f| f.follower_id() == follower_id && f.followee_id() == followee_id))
    }
}
