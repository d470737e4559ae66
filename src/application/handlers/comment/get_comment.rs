//! GetCommentHandler - Query handler for a single comment.

use std::sync::Arc;

use super::CommentView;
use crate::domain::foundation::{CommentId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::CommentRepository;

/// Query for one comment by ID.
#[derive(Debug, Clone)]
pub struct GetCommentQuery {
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for fetching a single comment. The parent curriculum must be
/// accessible to the caller.
pub struct GetCommentHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn CommentRepository>,
}

impl GetCommentHandler {
    pub fn new(service: Arc<SocialDomainService>, repository: Arc<dyn CommentRepository>) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, query: GetCommentQuery) -> Result<CommentView, SocialError> {
        let comment = self
            .repository
            .find_by_id(&query.comment_id)
            .await?
            .ok_or_else(|| SocialError::not_found("Comment"))?;

        let accessible = self
            .service
            .can_access_curriculum(comment.curriculum_id(), &query.user_id, query.role)
            .await?;
        if !accessible {
            return Err(SocialError::not_accessible(comment.curriculum_id().clone()));
        }

        Ok(CommentView::from(&comment))
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

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn curriculum_id(id: &str) -> CurriculumId {
        CurriculumId::new(id).unwrap()
    }

    struct Fixture {
        handler: GetCommentHandler,
        comments: Arc<InMemoryCommentRepository>,
        service: Arc<SocialDomainService>,
    }

    fn fixture() -> Fixture {
        let reader = Arc::new(InMemoryCurriculumReader::new());
        reader.insert(Curriculum::new(
            curriculum_id("curr-public"),
            user("owner"),
            "Public curriculum",
            Visibility::Public,
        ));
        reader.insert(Curriculum::new(
            curriculum_id("curr-private"),
            user("owner"),
            "Private curriculum",
            Visibility::Private,
        ));

        let comments = Arc::new(InMemoryCommentRepository::new());
        let service = Arc::new(SocialDomainService::new(
            reader,
            Arc::new(InMemoryLikeRepository::new()),
            Arc::new(InMemoryBookmarkRepository::new()),
            Arc::new(UuidV7Generator::new()),
        ));
        Fixture {
            handler: GetCommentHandler::new(service.clone(), comments.clone()),
            comments,
            service,
        }
    }

    async fn seed_comment(f: &Fixture, curriculum: &str, author: &str) -> CommentId {
        let comment = f
            .service
            .create_comment(curriculum_id(curriculum), user(author), "a comment", None)
            .unwrap();
        f.comments.save(&comment).await.unwrap();
        comment.id().clone()
    }

    #[tokio::test]
    async fn returns_comment_on_accessible_curriculum() {
        let f = fixture();
        let id = seed_comment(&f, "curr-public", "alice").await;

        let view = f
            .handler
            .handle(GetCommentQuery {
                comment_id: id.clone(),
                user_id: user("viewer"),
                role: Role::User,
            })
            .await
            .unwrap();

        assert_eq!(view.id, id);
        assert_eq!(view.content, "a comment");
    }

    #[tokio::test]
    async fn missing_comment_is_not_found() {
        let f = fixture();
        let err = f
            .handler
            .handle(GetCommentQuery {
                comment_id: CommentId::new("nope").unwrap(),
                user_id: user("viewer"),
                role: Role::User,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::NotFound(_)));
    }

    #[tokio::test]
    async fn private_curriculum_comment_is_hidden_from_strangers() {
        let f = fixture();
        let id = seed_comment(&f, "curr-private", "owner").await;

        let err = f
            .handler
            .handle(GetCommentQuery {
                comment_id: id.clone(),
                user_id: user("stranger"),
                role: Role::User,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::CurriculumNotAccessible(_)));

        // The owner still reads it.
        let view = f
            .handler
            .handle(GetCommentQuery {
                comment_id: id,
                user_id: user("owner"),
                role: Role::User,
            })
            .await
            .unwrap();
        assert_eq!(view.user_id, user("owner"));
    }
}
