//! ListCommentsHandler - Query handler for paginated comment listings.

use std::sync::Arc;

use super::CommentView;
use crate::domain::foundation::{CurriculumId, Page, PageRequest, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::CommentRepository;

/// Query for comments, in one of three modes:
///
/// - `curriculum_id` set: comments on that curriculum (requires access)
/// - `user_id` set: comments written by that user (self or admin only)
/// - neither: the requester's own comments
#[derive(Debug, Clone)]
pub struct ListCommentsQuery {
    pub requester_id: UserId,
    pub role: Role,
    pub curriculum_id: Option<CurriculumId>,
    pub user_id: Option<UserId>,
    pub page: PageRequest,
}

impl ListCommentsQuery {
    /// Query for the requester's own comments.
    pub fn own(requester_id: UserId, role: Role, page: PageRequest) -> Self {
        Self {
            requester_id,
            role,
            curriculum_id: None,
            user_id: None,
            page,
        }
    }

    /// Query for a curriculum's comments.
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

/// Handler for listing comments.
pub struct ListCommentsHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn CommentRepository>,
}

impl ListCommentsHandler {
    pub fn new(service: Arc<SocialDomainService>, repository: Arc<dyn CommentRepository>) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(&self, query: ListCommentsQuery) -> Result<Page<CommentView>, SocialError> {
        let (total, comments) = if let Some(curriculum_id) = &query.curriculum_id {
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

        Ok(Page::new(comments, total, query.page).map(|comment| CommentView::from(&comment)))
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
    use crate::domain::foundation::{CommentId, Timestamp};
    use crate::domain::social::{Comment, CommentContent};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn curriculum_id(id: &str) -> CurriculumId {
        CurriculumId::new(id).unwrap()
    }

    struct Fixture {
        handler: ListCommentsHandler,
        comments: Arc<InMemoryCommentRepository>,
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
            handler: ListCommentsHandler::new(service, comments.clone()),
            comments,
        }
    }

    async fn seed(f: &Fixture, n: u64, curriculum: &str, author: &str) {
        let t0 = Timestamp::now();
        for i in 0..n {
            let at = t0.plus_secs(i);
            let comment = Comment::reconstitute(
                CommentId::new(format!("cm-{:03}", i)).unwrap(),
                curriculum_id(curriculum),
                user(author),
                CommentContent::new(format!("comment {}", i)).unwrap(),
                at,
                at,
            );
            f.comments.save(&comment).await.unwrap();
        }
    }

    #[tokio::test]
    async fn page_two_holds_the_second_window_newest_first() {
        let f = fixture();
        seed(&f, 25, "curr-public", "alice").await;

        let page = f
            .handler
            .handle(ListCommentsQuery::for_curriculum(
                user("viewer"),
                Role::User,
                curriculum_id("curr-public"),
                PageRequest::new(2, 10),
            ))
            .await
            .unwrap();

        assert_eq!(page.total_count, 25);
        assert_eq!(page.items.len(), 10);
        // 25 seeded, newest-first: page 2 runs from the 11th newest (cm-014)
        // down to the 20th (cm-005).
        assert_eq!(page.items[0].id, CommentId::new("cm-014").unwrap());
        assert_eq!(page.items[9].id, CommentId::new("cm-005").unwrap());
        assert!(page.has_next());
    }

    #[tokio::test]
    async fn private_curriculum_listing_is_rejected() {
        let f = fixture();
        let err = f
            .handler
            .handle(ListCommentsQuery::for_curriculum(
                user("stranger"),
                Role::User,
                curriculum_id("curr-private"),
                PageRequest::default(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::CurriculumNotAccessible(_)));
    }

    #[tokio::test]
    async fn empty_curriculum_yields_empty_page() {
        let f = fixture();
        let page = f
            .handler
            .handle(ListCommentsQuery::for_curriculum(
                user("viewer"),
                Role::User,
                curriculum_id("curr-public"),
                PageRequest::default(),
            ))
            .await
            .unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn other_users_comments_require_admin() {
        let f = fixture();
        seed(&f, 2, "curr-public", "bob").await;

        let mut query = ListCommentsQuery::own(user("alice"), Role::User, PageRequest::default());
        query.user_id = Some(user("bob"));

        let err = f.handler.handle(query.clone()).await.unwrap_err();
        assert!(matches!(err, SocialError::AccessDenied));

        query.role = Role::Admin;
        let page = f.handler.handle(query).await.unwrap();
        assert_eq!(page.total_count, 2);
    }

    #[tokio::test]
    async fn default_mode_lists_own_comments() {
        let f = fixture();
        seed(&f, 3, "curr-public", "alice").await;
        seed(&f, 2, "curr-public", "bob").await;

        let page = f
            .handler
            .handle(ListCommentsQuery::own(
                user("alice"),
                Role::User,
                PageRequest::default(),
            ))
            .await
            .unwrap();
        assert_eq!(page.total_count, 3);
    }
}
