//! In-memory bookmark repository for testing.
//!
//! Same composite-key guarantee as the like repository. Testing only;
//! methods panic on poisoned locks.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{
    BookmarkId, CurriculumId, DomainError, ErrorCode, PageRequest, UserId,
};
use crate::domain::social::Bookmark;
use crate::ports::BookmarkRepository;

/// In-memory `BookmarkRepository` implementation.
pub struct InMemoryBookmarkRepository {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl InMemoryBookmarkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            bookmarks: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored bookmarks (for test assertions).
    pub fn len(&self) -> usize {
        self.bookmarks.read().expect("bookmarks lock poisoned").len()
    }

    /// True when no bookmarks are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn page_of(mut matches: Vec<Bookmark>, page: &PageRequest) -> (u64, Vec<Bookmark>) {
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

impl Default for InMemoryBookmarkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn save(&self, bookmark: &Bookmark) -> Result<(), DomainError> {
        let mut bookmarks = self.bookmarks.write().expect("bookmarks lock poisoned");
        if bookmarks.iter().any(|b| {
            b.curriculum_id() == bookmark.curriculum_id() && b.user_id() == bookmark.user_id()
        }) {
            return Err(DomainError::already_exists(format!(
                "Bookmark for ({}, {})",
                bookmark.curriculum_id(),
                bookmark.user_id()
            )));
        }
        bookmarks.push(bookmark.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, DomainError> {
        let bookmarks = self.bookmarks.read().expect("bookmarks lock poisoned");
        Ok(bookmarks.iter().find(|b| b.id() == id).cloned())
    }

    async fn find_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<Option<Bookmark>, DomainError> {
        let bookmarks = self.bookmarks.read().expect("bookmarks lock poisoned");
        Ok(bookmarks
            .iter()
            .find(|b| b.curriculum_id() == curriculum_id && b.user_id() == user_id)
            .cloned())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Bookmark>), DomainError> {
        let bookmarks = self.bookmarks.read().expect("bookmarks lock poisoned");
        let matches = bookmarks
            .iter()
            .filter(|b| b.user_id() == user_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn find_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Bookmark>), DomainError> {
        let bookmarks = self.bookmarks.read().expect("bookmarks lock poisoned");
        let matches = bookmarks
            .iter()
            .filter(|b| b.curriculum_id() == curriculum_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn delete(&self, id: &BookmarkId) -> Result<(), DomainError> {
        let mut bookmarks = self.bookmarks.write().expect("bookmarks lock poisoned");
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id() != id);
        if bookmarks.len() == before {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Bookmark not found: {}", id),
            ));
        }
        Ok(())
    }

    async fn delete_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<(), DomainError> {
        let mut bookmarks = self.bookmarks.write().expect("bookmarks lock poisoned");
        let before = bookmarks.len();
        bookmarks.retain(|b| !(b.curriculum_id() == curriculum_id && b.user_id() == user_id));
        if bookmarks.len() == before {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Bookmark not found for ({}, {})", curriculum_id, user_id),
            ));
        }
        Ok(())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let bookmarks = self.bookmarks.read().expect("bookmarks lock poisoned");
        Ok(bookmarks.iter().filter(|b| b.user_id() == user_id).count() as u64)
    }

    async fn count_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
    ) -> Result<u64, DomainError> {
        let bookmarks = self.bookmarks.read().expect("bookmarks lock poisoned");
        Ok(bookmarks
            .iter()
            .filter(|b| b.curriculum_id() == curriculum_id)
            .count() as u64)
    }

    async fn exists_by_curriculum_and_user(
        &self,
        curriculum_id: &CurriculumId,
        user_id: &UserId,
    ) -> Result<bool, DomainError> {
        let bookmarks = self.bookmarks.read().expect("bookmarks lock poisoned");
        Ok(bookmarks
            .iter()
            .any(|b| b.curriculum_id() == curriculum_id && b.user_id() == user_id))
    }
}
