//! In-memory like repository for testing.
//!
//! Enforces the (curriculum_id, user_id) composite key inside a single
//! write-lock acquisition, mirroring the unique index a relational adapter
//! would rely on. Testing only; methods panic on poisoned locks.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{
    CurriculumId, DomainError, LikeId, PageRequest, UserId,
};
use crate::domain::social::Like;
use crate::ports::LikeRepository;

/// In-memory `LikeRepository` implementation.
pub struct InMemoryLikeRepository {
    likes: RwLock<Vec<Like>>,
}

impl InMemoryLikeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            likes: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored likes (for test assertions).
    pub fn len(&self) -> usize {
        self.likes.read().expect("likes lock poisoned").len()
    }

    /// True when no likes are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn page_of(mut matches: Vec<Like>, page: &PageRequest) -> (u64, Vec<Like>) {
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

impl Default for InMemoryLikeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn save(&self, like: &Like) -> Result<(), DomainError> {
        let mut likes = self.likes.write().expect("likes lock poisoned");
        // Single lock acquisition makes check-then-insert atomic, like a
        // unique index would.
        if likes.iter().any(|l| {
            l.curriculum_id() == like.curriculum_id() && l.user_id() == like.user_id()
        }) {
            return Err(DomainError::already_exists(format!(
                "Like for ({}, {})",
                like.curriculum_id(),
                like.user_id()
            )));
        }
        likes.push(like.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &LikeId) -> Result<Option<Like>, DomainError> {
        let likes = self.likes.read().expect("likes lock poisoned");
        Ok(likes.iter().find(|l| l.id() == id).cloned())
    }

    async fn find_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<Option<Like>, DomainError> {
        let likes = self.likes.read().expect("likes lock poisoned");
        Ok(likes
            .iter()
            .find(|l| l.curriculum_id() == curriculum_id && l.user_id() == user_id)
            .cloned())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Like>), DomainError> {
        let likes = self.likes.read().expect("likes lock poisoned");
        let matches = likes
            .iter()
            .filter(|l| l.user_id() == user_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn find_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Like>), DomainError> {
        let likes = self.likes.read().expect("likes lock poisoned");
        let matches = likes
            .iter()
            .filter(|l| l.curriculum_id() == curriculum_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn delete(&self, id: &LikeId) -> Result<(), DomainError> {
        let mut likes = self.likes.write().expect("likes lock poisoned");
        let before = likes.len();
        likes.retain(|l| l.id() != id);
        if likes.len() == before {
            return Err(DomainError::new(
                crate::domain::foundation::ErrorCode::NotFound,
                format!("Like not found: {}", id),
            ));
        }
        Ok(())
    }

    async fn delete_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<(), DomainError> {
        let mut likes = self.likes.write().expect("likes lock poisoned");
        let before = likes.len();
        likes.retain(|l| !(l.curriculum_id() == curriculum_id && l.user_id() == user_id));
        if likes.len() == before {
            return Err(DomainError::new(
                crate::domain::foundation::ErrorCode::NotFound,
                format!("Like not found for ({}, {})", curriculum_id, user_id),
            ));
        }
        Ok(())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let likes = self.likes.read().expect("likes lock poisoned");
        Ok(likes.iter().filter(|l| l.user_id() == user_id).count() as u64)
    }

    async fn count_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
    ) -> Result<u64, DomainError> {
        let likes = self.likes.read().expect("likes lock poisoned");
        Ok(likes
            .iter()
            .filter(|l| l.curriculum_id() == curriculum_id)
            .count() as u64)
    }

    async fn exists_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<bool, DomainError> {
        let likes = self.likes.read().expect("likes lock poisoned");
        Ok(likes
            .iter()
            .any(|l| l.curriculum_id() == curriculum_id && l.user_id() == user_id))
    }
}
