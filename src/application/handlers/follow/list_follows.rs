//! ListFollowsHandler - Query handler for follower and following listings.

use std::sync::Arc;

use super::FollowView;
use crate::domain::foundation::{Page, PageRequest, UserId};
use crate::domain::social::SocialError;
use crate::ports::FollowRepository;

/// Which side of the follow relationship to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowDirection {
    /// Follows where the subject is the followee.
    Followers,
    /// Follows where the subject is the follower.
    Following,
}

/// Query for one page of a user's followers or followees.
///
/// Follower and following lists are public; no requester gate applies.
#[derive(Debug, Clone)]
pub struct ListFollowsQuery {
    pub user_id: UserId,
    pub direction: FollowDirection,
    pub page: PageRequest,
}

/// Handler for listing follows.
pub struct ListFollowsHandler {
    repository: Arc<dyn FollowRepository>,
}

impl ListFollowsHandler {
    pub fn new(repository: Arc<dyn FollowRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListFollowsQuery) -> Result<Page<FollowView>, SocialError> {
        let (total, follows) = match query.direction {
            FollowDirection::Followers => {
                self.repository
                    .find_followers(&query.user_id, &query.page)
                    .await?
            }
            FollowDirection::Following => {
                self.repository
                    .find_following(&query.user_id, &query.page)
                    .await?
            }
        };

        Ok(Page::new(follows, total, query.page).map(|follow| FollowView::from(&follow)))
    }
}
