//! CurriculumStatsHandler - Aggregate counters for a curriculum.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CurriculumId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::{BookmarkRepository, CommentRepository, LikeRepository};

/// Query for a curriculum's interaction counters, decorated with the
/// viewer's own like and bookmark state.
#[derive(Debug, Clone)]
pub struct CurriculumStatsQuery {
    pub curriculum_id: CurriculumId,
    pub viewer_id: UserId,
    pub role: Role,
}

/// Aggregated curriculum counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumStatsView {
    pub curriculum_id: CurriculumId,
    pub like_count: u64,
    pub comment_count: u64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

/// Handler for curriculum stats.
///
/// Counts are served without an accessibility gate; the viewer flags reuse
/// the fail-open status contract and answer `false` for curricula the
/// viewer cannot see.
pub struct CurriculumStatsHandler {
    service: Arc<SocialDomainService>,
    likes: Arc<dyn LikeRepository>,
    comments: Arc<dyn CommentRepository>,
    bookmarks: Arc<dyn BookmarkRepository>,
}

impl CurriculumStatsHandler {
    pub fn new(
        service: Arc<SocialDomainService>,
        likes: Arc<dyn LikeRepository>,
        comments: Arc<dyn CommentRepository>,
        bookmarks: Arc<dyn BookmarkRepository>,
    ) -> Self {
        Self {
            service,
            likes,
            comments,
            bookmarks,
        }
    }

    pub async fn handle(
        &self,
        query: CurriculumStatsQuery,
    ) -> Result<CurriculumStatsView, SocialError> {
        let like_count = self.likes.count_by_curriculum(&query.curriculum_id).await?;
        let comment_count = self
            .comments
            .count_by_curriculum(&query.curriculum_id)
            .await?;

        let accessible = self
            .service
            .can_access_curriculum(&query.curriculum_id, &query.viewer_id, query.role)
            .await?;
        let (is_liked, is_bookmarked) = if accessible {
            (
                self.likes
                    .exists_by_curriculum_and_user(&query.curriculum_id, &query.viewer_id)
                    .await?,
                self.bookmarks
                    .exists_by_curriculum_and_user(&query.curriculum_id, &query.viewer_id)
                    .await?,
            )
        } else {
            (false, false)
        };

        Ok(CurriculumStatsView {
            curriculum_id: query.curriculum_id,
            like_count,
            comment_count,
            is_liked,
            is_bookmarked,
        })
    }
}
