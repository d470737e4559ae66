//! Metrics sink port.

use async_trait::async_trait;
use std::fmt;

use crate::domain::foundation::DomainError;

/// Creation counters emitted by the application services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialCounter {
    LikesCreated,
    CommentsCreated,
    BookmarksCreated,
    FollowsCreated,
}

impl fmt::Display for SocialCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SocialCounter::LikesCreated => "likes_created",
            SocialCounter::CommentsCreated => "comments_created",
            SocialCounter::BookmarksCreated => "bookmarks_created",
            SocialCounter::FollowsCreated => "follows_created",
        };
        write!(f, "{}", s)
    }
}

/// Fire-and-forget counter sink.
///
/// Callers log and swallow errors from this port; a metrics outage must
/// never change a request outcome.
#[async_trait]
pub trait MetricsSink: Send + Sync {
    /// Increment a counter by one.
    async fn increment(&self, counter: SocialCounter) -> Result<(), DomainError>;
}
