//! CreateCommentHandler - Command handler for commenting on a curriculum.

use std::sync::Arc;
use tracing::{info, warn};

use super::CommentView;
use crate::domain::foundation::{CurriculumId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::{CommentRepository, MetricsSink, SocialCounter};

/// Command to comment on a curriculum. Content is raw caller input and is
/// validated here, not upstream.
#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub role: Role,
    pub content: String,
}

/// Handler for creating comments.
pub struct CreateCommentHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn CommentRepository>,
    metrics: Arc<dyn MetricsSink>,
}

impl CreateCommentHandler {
    pub fn new(
        service: Arc<SocialDomainService>,
        repository: Arc<dyn CommentRepository>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            service,
            repository,
            metrics,
        }
    }

    pub async fn handle(&self, cmd: CreateCommentCommand) -> Result<CommentView, SocialError> {
        let allowed = self
            .service
            .can_comment_on_curriculum(&cmd.curriculum_id, &cmd.user_id, cmd.role)
            .await?;
        if !allowed {
            return Err(SocialError::not_accessible(cmd.curriculum_id));
        }

        let comment = self.service.create_comment(
            cmd.curriculum_id.clone(),
            cmd.user_id.clone(),
            &cmd.content,
            None,
        )?;
        self.repository.save(&comment).await?;

        info!(
            comment_id = %comment.id(),
            curriculum_id = %cmd.curriculum_id,
            user_id = %cmd.user_id,
            "comment created"
        );

        if let Err(err) = self
            .metrics
            .increment(SocialCounter::CommentsCreated)
            .await
        {
            warn!(error = %err, "failed to record comment metric");
        }

        Ok(CommentView::from(&comment))
    }
}
