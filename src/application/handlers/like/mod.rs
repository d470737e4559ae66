//! Like handlers.

mod create_like;
mod delete_like;
mod like_status;
mod list_likes;

pub use create_like::{CreateLikeCommand, CreateLikeHandler};
pub use delete_like::{DeleteLikeCommand, DeleteLikeHandler};
pub use like_status::{LikeStatusHandler, LikeStatusQuery};
pub use list_likes::{ListLikesHandler, ListLikesQuery};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CurriculumId, LikeId, Timestamp, UserId};
use crate::domain::social::Like;

/// Read-only like projection for transport across the core boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeView {
    pub id: LikeId,
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub created_at: Timestamp,
}

impl From<&Like> for LikeView {
    fn from(like: &Like) -> Self {
        Self {
            id: like.id().clone(),
            curriculum_id: like.curriculum_id().clone(),
            user_id: like.user_id().clone(),
            created_at: *like.created_at(),
        }
    }
}
