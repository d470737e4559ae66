//! DeleteLikeHandler - Command handler for removing a like.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{CurriculumId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::LikeRepository;

/// Command to remove a like from a curriculum.
#[derive(Debug, Clone)]
pub struct DeleteLikeCommand {
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for deleting likes.
pub struct DeleteLikeHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn LikeRepository>,
}

impl DeleteLikeHandler {
    pub fn new(service: Arc<SocialDomainService>, repository: Arc<dyn LikeRepository>) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, cmd: DeleteLikeCommand) -> Result<(), SocialError> {
        // 1. Curriculum must still be accessible to the caller.
        let accessible = self
            .service
            .can_access_curriculum(&cmd.curriculum_id, &cmd.user_id, cmd.role)
            .await?;
        if !accessible {
            return Err(SocialError::not_accessible(cmd.curriculum_id));
        }

        // 2. Load the like for the composite key.
        let like = self
            .repository
            .find_by_curriculum_and_user(&cmd.curriculum_id, &cmd.user_id)
            .await?
            .ok_or_else(|| SocialError::not_found("Like"))?;

        // 3. Ownership gate (admin bypass).
        if !cmd.role.is_admin() && !like.is_owned_by(&cmd.user_id) {
            return Err(SocialError::access_denied());
        }

        self.repository.delete(like.id()).await?;

        info!(
            curriculum_id = %cmd.curriculum_id,
            user_id = %cmd.user_id,
            "like deleted"
        );
        Ok(())
    }
}
