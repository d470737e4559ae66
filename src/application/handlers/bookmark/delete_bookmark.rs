//! DeleteBookmarkHandler - Command handler for removing a bookmark.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{CurriculumId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::BookmarkRepository;

/// Command to remove a bookmark from a curriculum.
#[derive(Debug, Clone)]
pub struct DeleteBookmarkCommand {
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for deleting bookmarks.
pub struct DeleteBookmarkHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn BookmarkRepository>,
}

impl DeleteBookmarkHandler {
    pub fn new(
        service: Arc<SocialDomainService>,
        repository: Arc<dyn BookmarkRepository>,
    ) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, cmd: DeleteBookmarkCommand) -> Result<(), SocialError> {
        let accessible = self
            .service
            .can_access_curriculum(&cmd.curriculum_id, &cmd.user_id, cmd.role)
            .await?;
        if !accessible {
            return Err(SocialError::not_accessible(cmd.curriculum_id));
        }

        let bookmark = self
            .repository
            .find_by_curriculum_and_user(&cmd.curriculum_id, &cmd.user_id)
            .await?
            .ok_or_else(|| SocialError::not_found("Bookmark"))?;

        if !cmd.role.is_admin() && !bookmark.is_owned_by(&cmd.user_id) {
            return Err(SocialError::access_denied());
        }

        self.repository.delete(bookmark.id()).await?;

        info!(
            curriculum_id = %cmd.curriculum_id,
            user_id = %cmd.user_id,
            "bookmark deleted"
        );
        Ok(())
    }
}
