//! UpdateCommentHandler - Command handler for editing a comment.

use std::sync::Arc;
use tracing::info;

use super::CommentView;
use crate::domain::foundation::{CommentId, Role, UserId};
use crate::domain::social::{CommentContent, SocialDomainService, SocialError};
use crate::ports::CommentRepository;

/// Command to replace a comment's content.
#[derive(Debug, Clone)]
pub struct UpdateCommentCommand {
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub role: Role,
    pub content: String,
}

/// Handler for editing comments. Author-or-admin only.
pub struct UpdateCommentHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn CommentRepository>,
}

impl UpdateCommentHandler {
    pub fn new(service: Arc<SocialDomainService>, repository: Arc<dyn CommentRepository>) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, cmd: UpdateCommentCommand) -> Result<CommentView, SocialError> {
        let mut comment = self
            .repository
            .find_by_id(&cmd.comment_id)
            .await?
            .ok_or_else(|| SocialError::not_found("Comment"))?;

        if !self.service.can_modify_comment(&comment, &cmd.user_id, cmd.role) {
            return Err(SocialError::access_denied());
        }

        let content = CommentContent::new(&cmd.content).map_err(SocialError::invalid_content)?;

        // Writing back an unchanged value would bump nothing; skip the store.
        if comment.update_content(content) {
            self.repository.update(&comment).await?;
            info!(comment_id = %cmd.comment_id, user_id = %cmd.user_id, "comment updated");
        }

        Ok(CommentView::from(&comment))
    }
}
