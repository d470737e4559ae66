//! Bookmark handlers.

mod bookmark_status;
mod create_bookmark;
mod delete_bookmark;
mod list_bookmarks;

pub use bookmark_status::{BookmarkStatusHandler, BookmarkStatusQuery};
pub use create_bookmark::{CreateBookmarkCommand, CreateBookmarkHandler};
pub use delete_bookmark::{DeleteBookmarkCommand, DeleteBookmarkHandler};
pub use list_bookmarks::{ListBookmarksHandler, ListBookmarksQuery};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookmarkId, CurriculumId, Timestamp, UserId};
use crate::domain::social::Bookmark;

/// Read-only bookmark projection for transport across the core boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkView {
    pub id: BookmarkId,
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub created_at: Timestamp,
}

impl From<&Bookmark> for BookmarkView {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id().clone(),
            curriculum_id: bookmark.curriculum_id().clone(),
            user_id: bookmark.user_id().clone(),
            created_at: *bookmark.created_at(),
        }
    }
}
