//! In-memory comment repository for testing.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{
    CommentId, CurriculumId, DomainError, ErrorCode, PageRequest, UserId,
};
use crate::domain::social::Comment;
use crate::ports::CommentRepository;

/// In-memory `CommentRepository` implementation. Testing only; methods
/// panic on poisoned locks.
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            comments: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored comments (for test assertions).
    pub fn len(&self) -> usize {
        self.comments.read().expect("comments lock poisoned").len()
    }

    /// True when no comments are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn page_of(mut matches: Vec<Comment>, page: &PageRequest) -> (u64, Vec<Comment>) {
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

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn save(&self, comment: &Comment) -> Result<(), DomainError> {
        let mut comments = self.comments.write().expect("comments lock poisoned");
        comments.push(comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> Result<(), DomainError> {
        let mut comments = self.comments.write().expect("comments lock poisoned");
        match comments.iter_mut().find(|c| c.id() == comment.id()) {
            Some(existing) => {
                *existing = comment.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Comment not found: {}", comment.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, DomainError> {
        let comments = self.comments.read().expect("comments lock poisoned");
        Ok(comments.iter().find(|c| c.id() == id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Comment>), DomainError> {
        let comments = self.comments.read().expect("comments lock poisoned");
        let matches = comments
            .iter()
            .filter(|c| c.user_id() == user_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn find_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
        page: &PageRequest,
    ) -> Result<(u64, Vec<Comment>), DomainError> {
        let comments = self.comments.read().expect("comments lock poisoned");
        let matches = comments
            .iter()
            .filter(|c| c.curriculum_id() == curriculum_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matches, page))
    }

    async fn delete(&self, id: &CommentId) -> Result<(), DomainError> {
        let mut comments = self.comments.write().expect("comments lock poisoned");
        let before = comments.len();
        comments.retain(|c| c.id() != id);
        if comments.len() == before {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Comment not found: {}", id),
            ));
        }
        Ok(())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let comments = self.comments.read().expect("comments lock poisoned");
        Ok(comments.iter().filter(|c| c.user_id() == user_id).count() as u64)
    }

    async fn count_by_curriculum(
        &self,
        curriculum_id: &CurriculumId,
    ) -> Result<u64, DomainError> {
        let comments = self.comments.read().expect("comments lock poisoned");
        Ok(comments
            .iter()
            .filter(|c| c.curriculum_id() == curriculum_id)
            .count() as u64)
    }
}
