//! UserStatsHandler - Aggregate counters for a user profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::social::SocialError;
use crate::ports::{BookmarkRepository, CommentRepository, FollowRepository, LikeRepository};

/// Query for a user's interaction counters.
#[derive(Debug, Clone)]
pub struct UserStatsQuery {
    pub user_id: UserId,
}

/// The five counters a profile page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatsView {
    pub user_id: UserId,
    pub like_count: u64,
    pub comment_count: u64,
    pub bookmark_count: u64,
    pub follower_count: u64,
    pub following_count: u64,
}

/// Handler for user stats. Served without an access gate.
pub struct UserStatsHandler {
    likes: Arc<dyn LikeRepository>,
    comments: Arc<dyn CommentRepository>,
    bookmarks: Arc<dyn BookmarkRepository>,
    follows: Arc<dyn FollowRepository>,
}

impl UserStatsHandler {
    pub fn new(
        likes: Arc<dyn LikeRepository>,
        comments: Arc<dyn CommentRepository>,
        bookmarks: Arc<dyn BookmarkRepository>,
        follows: Arc<dyn FollowRepository>,
    ) -> Self {
        Self {
            likes,
            comments,
            bookmarks,
            follows,
        }
    }

    pub async fn handle(&self, query: UserStatsQuery) -> Result<UserStatsView, SocialError> {
        let like_count = self.likes.count_by_user(&query.user_id).await?;
        let comment_count = self.comments.count_by_user(&query.user_id).await?;
        let bookmark_count = self.bookmarks.count_by_user(&query.user_id).await?;
        let follower_count = self.follows.count_followers(&query.user_id).await?;
        let following_count = self.follows.count_following(&query.user_id).await?;

        Ok(UserStatsView {
            user_id: query.user_id,
            like_count,
            comment_count,
            bookmark_count,
            follower_count,
            following_count,
        })
    }
}
