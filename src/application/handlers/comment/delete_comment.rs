//! DeleteCommentHandler - Command handler for removing a comment.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{CommentId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::CommentRepository;

/// Command to delete a comment.
#[derive(Debug, Clone)]
pub struct DeleteCommentCommand {
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for deleting comments. Author-or-admin only, and the parent
/// curriculum must still be accessible to the caller.
pub struct DeleteCommentHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentHandler {
    pub fn new(service: Arc<SocialDomainService>, repository: Arc<dyn CommentRepository>) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, cmd: DeleteCommentCommand) -> Result<(), SocialError> {
        let comment = self
            .repository
            .find_by_id(&cmd.comment_id)
            .await?
            .ok_or_else(|| SocialError::not_found("Comment"))?;

        let accessible = self
            .service
            .can_access_curriculum(comment.curriculum_id(), &cmd.user_id, cmd.role)
            .await?;
        if !accessible {
            return Err(SocialError::not_accessible(comment.curriculum_id().clone()));
        }

        if !self.service.can_modify_comment(&comment, &cmd.user_id, cmd.role) {
            return Err(SocialError::access_denied());
        }

        self.repository.delete(&cmd.comment_id).await?;

        info!(comment_id = %cmd.comment_id, user_id = %cmd.user_id, "comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::id::UuidV7Generator;
    use crate::adapters::memory::{
        InMemoryBookmarkRepository, InMemoryCommentRepository, InMemoryCurriculumReader,
        InMemoryLikeRepository,
    };
    use crate::domain::curriculum::{Curriculum, Visibility};
    use crate::domain::foundation::CurriculumId;
    use crate::domain::social::Comment;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    struct Fixture {
        handler: DeleteCommentHandler,
        comments: Arc<InMemoryCommentRepository>,
        reader: Arc<InMemoryCurriculumReader>,
        service: Arc<SocialDomainService>,
    }

    fn fixture() -> Fixture {
        let reader = Arc::new(InMemoryCurriculumReader::new());
        reader.insert(Curriculum::new(
            CurriculumId::new("curr-public").unwrap(),
            user("owner"),
            "Public curriculum",
            Visibility::Public,
        ));

        let comments = Arc::new(InMemoryCommentRepository::new());
        let service = Arc::new(SocialDomainService::new(
            reader.clone(),
            Arc::new(InMemoryLikeRepository::new()),
            Arc::new(InMemoryBookmarkRepository::new()),
            Arc::new(UuidV7Generator::new()),
        ));
        Fixture {
            handler: DeleteCommentHandler::new(service.clone(), comments.clone()),
            comments,
            reader,
            service,
        }
    }

    async fn seed_comment(f: &Fixture, author: &str) -> Comment {
        let comment = f
            .service
            .create_comment(
                CurriculumId::new("curr-public").unwrap(),
                user(author),
                "a comment",
                None,
            )
            .unwrap();
        f.comments.save(&comment).await.unwrap();
        comment
    }

    #[tokio::test]
    async fn author_deletes_own_comment() {
        let f = fixture();
        let comment = seed_comment(&f, "alice").await;

        f.handler
            .handle(DeleteCommentCommand {
                comment_id: comment.id().clone(),
                user_id: user("alice"),
                role: Role::User,
            })
            .await
            .unwrap();

        assert!(f.comments.is_empty());
    }

    #[tokio::test]
    async fn non_author_is_denied() {
        let f = fixture();
        let comment = seed_comment(&f, "alice").await;

        let err = f
            .handler
            .handle(DeleteCommentCommand {
                comment_id: comment.id().clone(),
                user_id: user("bob"),
                role: Role::User,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::AccessDenied));
        assert_eq!(f.comments.len(), 1);
    }

    #[tokio::test]
    async fn admin_deletes_any_comment() {
        let f = fixture();
        let comment = seed_comment(&f, "alice").await;

        f.handler
            .handle(DeleteCommentCommand {
                comment_id: comment.id().clone(),
                user_id: user("moderator"),
                role: Role::Admin,
            })
            .await
            .unwrap();
        assert!(f.comments.is_empty());
    }

    #[tokio::test]
    async fn missing_comment_is_not_found() {
        let f = fixture();
        let err = f
            .handler
            .handle(DeleteCommentCommand {
                comment_id: CommentId::new("nope").unwrap(),
                user_id: user("alice"),
                role: Role::User,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::NotFound(_)));
    }

    #[tokio::test]
    async fn vanished_curriculum_blocks_non_admin_deletion() {
        let f = fixture();
        let comment = seed_comment(&f, "alice").await;
        f.reader.remove(&CurriculumId::new("curr-public").unwrap());

        let err = f
            .handler
            .handle(DeleteCommentCommand {
                comment_id: comment.id().clone(),
                user_id: user("alice"),
                role: Role::User,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::CurriculumNotAccessible(_)));
        assert_eq!(f.comments.len(), 1);
    }
}
