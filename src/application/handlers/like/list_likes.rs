//! ListLikesHandler - Query handler for paginated like listings.

use std::sync::Arc;

use super::LikeView;
use crate::domain::foundation::{CurriculumId, Page, PageRequest, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::LikeRepository;

/// Query for likes, in one of three modes:
///
/// - `curriculum_id` set: likes on that curriculum (requires access)
/// - `user_id` set: likes given by that user (self or admin only)
/// - neither: the requester's own likes
#[derive(Debug, Clone)]
pub struct ListLikesQuery {
    pub requester_id: UserId,
    pub role: Role,
    pub curriculum_id: Option<CurriculumId>,
    pub user_id: Option<UserId>,
    pub page: PageRequest,
}

impl ListLikesQuery {
    /// Query for the requester's own likes.
    pub fn own(requester_id: UserId, role: Role, page: PageRequest) -> Self {
        Self {
            requester_id,
            role,
            curriculum_id: None,
            user_id: None,
            page,
        }
    }

    /// Query for a curriculum's likes.
    pub fn for_curriculum(
        requester_id: UserId,
        role: Role,
        curriculum_id: CurriculumId,
        page: PageRequest,
    ) -> Self {
        Self {
            requester_id,
            role,
            curriculum_id: Some(curriculum_id),
            user_id: None,
            page,
        }
    }
}

/// Handler for listing likes.
pub struct ListLikesHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn LikeRepository>,
}

impl ListLikesHandler {
    pub fn new(service: Arc<SocialDomainService>, repository: Arc<dyn LikeRepository>) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, query: ListLikesQuery) -> Result<Page<LikeView>, SocialError> {
        let (total, likes) = if let Some(curriculum_id) = &query.curriculum_id {
            let accessible = self
                .service
                .can_access_curriculum(curriculum_id, &query.requester_id, query.role)
                .await?;
            if !accessible {
                return Err(SocialError::not_accessible(curriculum_id.clone()));
            }
            self.repository
                .find_by_curriculum(curriculum_id, &query.page)
                .await?
        } else if let Some(user_id) = &query.user_id {
            if user_id != &query.requester_id && !query.role.is_admin() {
                return Err(SocialError::access_denied());
            }
            self.repository.find_by_user(user_id, &query.page).await?
        } else {
            self.repository
                .find_by_user(&query.requester_id, &query.page)
                .await?
        };

        Ok(Page::new(likes, total, query.page).map(|like| LikeView::from(&like)))
    }
}
