//! LikeStatusHandler - Query handler answering "has this user liked this?".

use std::sync::Arc;

use crate::domain::foundation::{CurriculumId, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::LikeRepository;

/// Query for a user's like status on a curriculum.
#[derive(Debug, Clone)]
pub struct LikeStatusQuery {
    pub curriculum_id: CurriculumId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for like-status checks.
///
/// An inaccessible or missing curriculum answers `false` rather than an
/// error, so callers can decorate listings without branching on access.
pub struct LikeStatusHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn LikeRepository>,
}

impl LikeStatusHandler {
    pub fn new(service: Arc<SocialDomainService>, repository: Arc<dyn LikeRepository>) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, query: LikeStatusQuery) -> Result<bool, SocialError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::id::UuidV7Generator;
    use crate::adapters::memory::{
        InMemoryBookmarkRepository, InMemoryCurriculumReader, InMemoryLikeRepository,
    };
    use crate::domain::curriculum::{Curriculum, Visibility};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn curriculum_id(id: &str) -> CurriculumId {
        CurriculumId::new(id).unwrap()
    }

    struct Fixture {
        handler: LikeStatusHandler,
        likes: Arc<InMemoryLikeRepository>,
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

        let likes = Arc::new(InMemoryLikeRepository::new());
        let service = Arc::new(SocialDomainService::new(
            reader,
            likes.clone(),
            Arc::new(InMemoryBookmarkRepository::new()),
            Arc::new(UuidV7Generator::new()),
        ));
        Fixture {
            handler: LikeStatusHandler::new(service.clone(), likes.clone()),
            likes,
            service,
        }
    }

    #[tokio::test]
    async fn liked_curriculum_reports_true() {
        let f = fixture();
        let like = f
            .service
            .create_like(curriculum_id("curr-public"), user("alice"), None)
            .unwrap();
        f.likes.save(&like).await.unwrap();

        let status = f
            .handler
            .handle(LikeStatusQuery {
                curriculum_id: curriculum_id("curr-public"),
                user_id: user("alice"),
                role: Role::User,
            })
            .await
            .unwrap();
        assert!(status);
    }

    #[tokio::test]
    async fn unliked_curriculum_reports_false() {
        let f = fixture();
        let status = f
            .handler
            .handle(LikeStatusQuery {
                curriculum_id: curriculum_id("curr-public"),
                user_id: user("alice"),
                role: Role::User,
            })
            .await
            .unwrap();
        assert!(!status);
    }

    #[tokio::test]
    async fn inaccessible_curriculum_reports_false_not_error() {
        let f = fixture();
        let status = f
            .handler
            .handle(LikeStatusQuery {
                curriculum_id: curriculum_id("curr-private"),
                user_id: user("stranger"),
                role: Role::User,
            })
            .await
            .unwrap();
        assert!(!status);
    }

    #[tokio::test]
    async fn unknown_curriculum_reports_false() {
        let f = fixture();
        let status = f
            .handler
            .handle(LikeStatusQuery {
                curriculum_id: curriculum_id("curr-missing"),
                user_id: user("alice"),
                role: Role::User,
            })
            .await
            .unwrap();
        assert!(!status);
    }
}
