//! Follow handlers.

mod follow_user;
mod list_follows;
mod unfollow_user;

pub use follow_user::{FollowUserCommand, FollowUserHandler};
pub use list_follows::{FollowDirection, ListFollowsHandler, ListFollowsQuery};
pub use unfollow_user::{UnfollowUserCommand, UnfollowUserHandler};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FollowId, Timestamp, UserId};
use crate::domain::social::Follow;

/// Read-only follow projection for transport across the core boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowView {
    pub id: FollowId,
    pub follower_id: UserId,
    pub followee_id: UserId,
    pub created_at: Timestamp,
}

impl From<&Follow> for FollowView {
    fn from(follow: &Follow) -> Self {
        Self {
            id: follow.id().clone(),
            follower_id: follow.follower_id().clone(),
            followee_id: follow.followee_id().clone(),
            created_at: *follow.created_at(),
        }
    }
}
