//! ListBookmarksHandler - Query handler for paginated bookmark listings.

use std::sync::Arc;

use super::BookmarkView;
use crate::domain::foundation::{CurriculumId, Page, PageRequest, Role, UserId};
use crate::domain::social::{SocialDomainService, SocialError};
use crate::ports::BookmarkRepository;

/// Query for bookmarks, in one of three modes:
///
/// - `curriculum_id` set: bookmarks on that curriculum (requires access)
/// - `user_id` set: bookmarks by that user (self or admin only)
/// - neither: the requester's own bookmarks
#[derive(Debug, Clone)]
pub struct ListBookmarksQuery {
    pub requester_id: UserId,
    pub role: Role,
    pub curriculum_id: Option<CurriculumId>,
    pub user_id: Option<UserId>,
    pub page: PageRequest,
}

impl ListBookmarksQuery {
    /// Query for the requester's own bookmarks.
    pub fn own(requester_id: UserId, role: Role, page: PageRequest) -> Self {
        Self {
            requester_id,
            role,
            curriculum_id: None,
            user_id: None,
            page,
        }
    }

    /// Query for a curriculum's bookmarks.
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

/// Handler for listing bookmarks.
pub struct ListBookmarksHandler {
    service: Arc<SocialDomainService>,
    repository: Arc<dyn BookmarkRepository>,
}

impl ListBookmarksHandler {
    pub fn new(
        service: Arc<SocialDomainService>,
        repository: Arc<dyn BookmarkRepository>,
    ) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub async fn handle(
        &self,
        query: ListBookmarksQuery,
    ) -> Result<Page<BookmarkView>, SocialError> {
        let (total, bookmarks) = if let Some(curriculum_id) = &query.curriculum_id {
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

        Ok(Page::new(bookmarks, total, query.page).map(|bookmark| BookmarkView::from(&bookmark)))
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
    use crate::domain::foundation::{BookmarkId, Timestamp};
    use crate::domain::social::Bookmark;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn curriculum_id(id: &str) -> CurriculumId {
        CurriculumId::new(id).unwrap()
    }

    struct Fixture {
        handler: ListBookmarksHandler,
        bookmarks: Arc<InMemoryBookmarkRepository>,
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
        let service = Arc::new(SocialDomainService::new(
            reader,
            Arc::new(InMemoryLikeRepository::new()),
            bookmarks.clone(),
            Arc::new(UuidV7Generator::new()),
        ));
        Fixture {
            handler: ListBookmarksHandler::new(service, bookmarks.clone()),
            bookmarks,
        }
    }

    async fn seed_own(f: &Fixture, n: u64, owner: &str) {
        let t0 = Timestamp::now();
        for i in 0..n {
            let bookmark = Bookmark::reconstitute(
                BookmarkId::new(format!("bm-{}-{:03}", owner, i)).unwrap(),
                curriculum_id(&format!("curr-extra-{:03}", i)),
                user(owner),
                t0.plus_secs(i),
            );
            f.bookmarks.save(&bookmark).await.unwrap();
        }
    }

    #[tokio::test]
    async fn own_bookmarks_paginate_newest_first() {
        let f = fixture();
        seed_own(&f, 12, "alice").await;

        let page = f
            .handler
            .handle(ListBookmarksQuery::own(
                user("alice"),
                Role::User,
                PageRequest::new(2, 10),
            ))
            .await
            .unwrap();

        assert_eq!(page.total_count, 12);
        assert_eq!(page.items.len(), 2);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn curriculum_mode_requires_access() {
        let f = fixture();
        let err = f
            .handler
            .handle(ListBookmarksQuery::for_curriculum(
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
    async fn other_users_bookmarks_require_admin() {
        let f = fixture();
        seed_own(&f, 2, "bob").await;

        let mut query = ListBookmarksQuery::own(user("alice"), Role::User, PageRequest::default());
        query.user_id = Some(user("bob"));

        let err = f.handler.handle(query.clone()).await.unwrap_err();
        assert!(matches!(err, SocialError::AccessDenied));

        query.role = Role::Admin;
        let page = f.handler.handle(query).await.unwrap();
        assert_eq!(page.total_count, 2);
    }
}
