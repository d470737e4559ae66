//! BookmarkStatusHandler - Query handler answering "has this user bookmarked this?".

use std::sync::Arc;

use crate::domain::foundation::{CurriculumId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::BookmarkRepository;

/// Query for a user's bookmark status on a curriculum.
#[derive(Debug, Clone)]
pub struct BookmarkStatusQuery {
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for bookmark-status checks.
///
/// An inaccessible or missing curriculum answers `false` rather than an
/// error, matching the like-status contract.
pub struct BookmarkStatusHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn BookmarkRepository>,
}

impl BookmarkStatusHandler {
    pub fn new(
        service: Arc<SocialDomainService>,
        repository: Arc<dyn BookmarkRepository>,
    ) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, query: BookmarkStatusQuery) -> Result<bool, SocialError> {
        let accessible = self
            .service
            .can_access_curriculum(&query.curriculum_id, &query.user_id, query.role)
            .await?;
        if !accessible {
            return Ok(false);
        }
        self.repository
            .exists_by_curriculum_and_user(&query.curriculum_id, &query.user_id)
            .await
            .map_err(SocialError::from)
    }
}
