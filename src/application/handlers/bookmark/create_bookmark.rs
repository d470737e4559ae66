//! CreateBookmarkHandler - Command handler for bookmarking a curriculum.

use std::sync::Arc;
use tracing::{info, warn};

use super::BookmarkView;
use crate::domain::foundation::{CurriculumId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::{BookmarkRepository, MetricsSink, SocialCounter};

/// Command to bookmark a curriculum.
#[derive(Debug, Clone)]
pub struct CreateBookmarkCommand {
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for creating bookmarks.
pub struct CreateBookmarkHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn BookmarkRepository>,
    metrics: Arc<dyn MetricsSink>,
}

impl CreateBookmarkHandler {
    pub fn new(
        service: Arc<SocialDomainService>,
        repository: Arc<dyn BookmarkRepository>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            service,
            repository,
            metrics,
        }
    }

    pub async fn handle(&self, cmd: CreateBookmarkCommand) -> Result<BookmarkView, SocialError> {
        // The boolean conflates the two failure causes, so re-query
        // existence to pick the right error.
        let valid = self
            .service
            .validate_bookmark_creation(&cmd.curriculum_id, &cmd.user_id, cmd.role)
            .await?;
        if !valid {
            if self
                .repository
                .exists_by_curriculum_and_user(&cmd.curriculum_id, &cmd.user_id)
                .await?
            {
                return Err(SocialError::already_exists("Bookmark"));
            }
            return Err(SocialError::not_accessible(cmd.curriculum_id));
        }

        // A concurrent duplicate slips past the pre-check; the repository's
        // uniqueness constraint converts it to AlreadyExists.
        let bookmark = self
            .service
            .create_bookmark(cmd.curriculum_id.clone(), cmd.user_id.clone(), None)?;
        self.repository.save(&bookmark).await?;

        info!(
            curriculum_id = %cmd.curriculum_id,
            user_id = %cmd.user_id,
            "bookmark created"
        );

        if let Err(err) = self
            .metrics
            .increment(SocialCounter::BookmarksCreated)
            .await
        {
            warn!(error = %err, "failed to record bookmark metric");
        }

        Ok(BookmarkView::from(&bookmark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::id::UuidV7Generator;
    use crate::adapters::memory::{
        InMemoryBookmarkRepository, InMemoryCurriculumReader, InMemoryLikeRepository,
        InMemoryMetrics,
    };
    use crate::domain::curriculum::{Curriculum, Visibility};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn curriculum_id(id: &str) -> CurriculumId {
        CurriculumId::new(id).unwrap()
    }

    struct Fixture {
        handler: CreateBookmarkHandler,
        bookmarks: Arc<InMemoryBookmarkRepository>,
        metrics: Arc<InMemoryMetrics>,
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

        let bookmarks = Arc::new(InMemoryBookmarkRepository::new());
        let metrics = Arc::new(InMemoryMetrics::new());
        let service = Arc::new(SocialDomainService::new(
            reader,
            Arc::new(InMemoryLikeRepository::new()),
            bookmarks.clone(),
            Arc::new(UuidV7Generator::new()),
        ));
        Fixture {
            handler: CreateBookmarkHandler::new(service, bookmarks.clone(), metrics.clone()),
            bookmarks,
            metrics,
        }
    }

    #[tokio::test]
    async fn bookmark_on_public_curriculum_succeeds() {
        let f = fixture();
        let view = f
            .handler
            .handle(CreateBookmarkCommand {
                curriculum_id: curriculum_id("curr-public"),
                user_id: user("alice"),
                role: Role::User,
            })
            .await
            .unwrap();

        assert_eq!(view.user_id, user("alice"));
        assert_eq!(f.bookmarks.len(), 1);
        assert_eq!(f.metrics.count(SocialCounter::BookmarksCreated), 1);
    }

    #[tokio::test]
    async fn second_identical_bookmark_is_already_exists() {
        let f = fixture();
        let cmd = CreateBookmarkCommand {
            curriculum_id: curriculum_id("curr-public"),
            user_id: user("alice"),
            role: Role::User,
        };
        f.handler.handle(cmd.clone()).await.unwrap();

        let err = f.handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, SocialError::AlreadyExists(_)));
        assert_eq!(f.bookmarks.len(), 1);
    }

    #[tokio::test]
    async fn private_curriculum_is_not_accessible_to_stranger() {
        let f = fixture();
        let err = f
            .handler
            .handle(CreateBookmarkCommand {
                curriculum_id: curriculum_id("curr-private"),
                user_id: user("alice"),
                role: Role::User,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::CurriculumNotAccessible(_)));
        assert!(f.bookmarks.is_empty());
    }

    #[tokio::test]
    async fn owner_bookmarks_own_private_curriculum() {
        let f = fixture();
        let result = f
            .handler
            .handle(CreateBookmarkCommand {
                curriculum_id: curriculum_id("curr-private"),
                user_id: user("owner"),
                role: Role::User,
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn same_curriculum_bookmarkable_by_different_users() {
        let f = fixture();
        for name in ["alice", "bob", "carol"] {
            f.handler
                .handle(CreateBookmarkCommand {
                    curriculum_id: curriculum_id("curr-public"),
                    user_id: user(name),
                    role: Role::User,
                })
                .await
                .unwrap();
        }
        assert_eq!(f.bookmarks.len(), 3);
    }
}
