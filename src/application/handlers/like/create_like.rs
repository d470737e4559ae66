//! CreateLikeHandler - Command handler for liking a curriculum.

use std::sync::Arc;
use tracing::{info, warn};

use super::LikeView;
use crate::domain::foundation::{CurriculumId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::{LikeRepository, MetricsSink, SocialCounter};

/// Command to like a curriculum.
#[derive(Debug, Clone)]
pub struct CreateLikeCommand {
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for creating likes.
pub struct CreateLikeHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn LikeRepository>,
    metrics: Arc<dyn MetricsSink>,
}

impl CreateLikeHandler {
    pub fn new(
        service: Arc<SocialDomainService>,
        repository: Arc<dyn LikeRepository>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            service,
            repository,
            metrics,
        }
    }

    pub async fn handle(&self, cmd: CreateLikeCommand) -> Result<LikeView, SocialError> {
        // 1. Validate; the boolean conflates the two failure causes, so
        //    re-query existence to pick the right error.
        let valid = self
            .service
            .validate_like_creation(&cmd.curriculum_id, &cmd.user_id, cmd.role)
            .await?;
        if !valid {
            if self
                .repository
                .exists_by_curriculum_and_user(&cmd.curriculum_id, &cmd.user_id)
                .await?
            {
                return Err(SocialError::already_exists("Like"));
            }
            return Err(SocialError::not_accessible(cmd.curriculum_id));
        }

        // 2. Construct and persist. A concurrent duplicate slips past the
        //    pre-check here; the repository's uniqueness constraint converts
        //    it to AlreadyExists via the error mapping.
        let like = self
            .service
            .create_like(cmd.curriculum_id.clone(), cmd.user_id.clone(), None)?;
        self.repository.save(&like).await?;

        info!(
            curriculum_id = %cmd.curriculum_id,
            user_id = %cmd.user_id,
            "like created"
        );

        // 3. Fire-and-forget metric.
        if let Err(err) = self.metrics.increment(SocialCounter::LikesCreated).await {
            warn!(error = %err, "failed to record like metric");
        }

        Ok(LikeView::from(&like))
    }
}
