//! UnfollowUserHandler - Command handler for removing a follow.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::social::SocialError;
use crate::ports::FollowRepository;

/// Command to unfollow a user.
#[derive(Debug, Clone)]
pub struct UnfollowUserCommand {
    pub follower_id: UserId,
    pub followee_id: UserId,
}

/// Handler for removing follow relationships.
pub struct UnfollowUserHandler {
    repository: Arc<dyn FollowRepository>,
}

impl UnfollowUserHandler {
    pub fn new(repository: Arc<dyn FollowRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UnfollowUserCommand) -> Result<(), SocialError> {
        self.repository
            .delete_by_users(&cmd.follower_id, &cmd.followee_id)
            .await?;

        info!(
            follower_id = %cmd.follower_id,
            followee_id = %cmd.followee_id,
            "follow deleted"
        );
        Ok(())
    }
}
