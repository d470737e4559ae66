//! Comment handlers.

mod create_comment;
mod delete_comment;
mod get_comment;
mod list_comments;
mod update_comment;

pub use create_comment::{CreateCommentCommand, CreateCommentHandler};
pub use delete_comment::{DeleteCommentCommand, DeleteCommentHandler};
pub use get_comment::{GetCommentHandler, GetCommentQuery};
pub use list_comments::{ListCommentsHandler, ListCommentsQuery};
pub use update_comment::{UpdateCommentCommand, UpdateCommentHandler};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CommentId, CurriculumId, Timestamp, UserId};
use crate::domain::social::Comment;

/// Read-only comment projection for transport across the core boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: CommentId,
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().clone(),
            curriculum_id: comment.curriculum_id().clone(),
            user_id: comment.user_id().clone(),
            content: comment.content().as_str().to_owned(),
            created_at: *comment.created_at(),
            updated_at: *comment.updated_at(),
        }
    }
}
