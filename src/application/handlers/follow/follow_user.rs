//! FollowUserHandler - Command handler for following another user.

use std::sync::Arc;
use tracing::{info, warn};

use super::FollowView;
use crate::domain::foundation::{FollowId, Timestamp, UserId};
use crate::domain::social::{Follow, SocialError};
use crate::ports::{FollowRepository, IdGenerator, MetricsSink, SocialCounter};

/// Command to follow a user.
#[derive(Debug, Clone)]
pub struct FollowUserCommand {
    pub follower_id: UserId,
    pub followee_id: UserId,
}

/// Handler for creating follow relationships.
///
/// Follows need no curriculum access check; any authenticated user may
/// follow any other user except themselves.
pub struct FollowUserHandler {
    repository: Arc<dyn FollowRepository>,
    id_generator: Arc<dyn IdGenerator>,
    metrics: Arc<dyn MetricsSink>,
}

impl FollowUserHandler {
    pub fn new(
        repository: Arc<dyn FollowRepository>,
        id_generator: Arc<dyn IdGenerator>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            repository,
            id_generator,
            metrics,
        }
    }

    pub async fn handle(&self, cmd: FollowUserCommand) -> Result<FollowView, SocialError> {
        // Irreflexivity is checked by the entity constructor below, but a
        // duplicate pair is reported before id generation. The pre-check can
        // still race; the repository's composite key settles it.
        if self
            .repository
            .exists_by_users(&cmd.follower_id, &cmd.followee_id)
            .await?
        {
            return Err(SocialError::already_exists("Follow"));
        }

        let id = FollowId::new(self.id_generator.generate())
            .map_err(|e| SocialError::infrastructure(e.to_string()))?;
        let follow = Follow::new(
            id,
            cmd.follower_id.clone(),
            cmd.followee_id.clone(),
            Timestamp::now(),
        )?;
        self.repository.save(&follow).await?;

        info!(
            follower_id = %cmd.follower_id,
            followee_id = %cmd.followee_id,
            "follow created"
        );

        if let Err(err) = self.metrics.increment(SocialCounter::FollowsCreated).await {
            warn!(error = %err, "failed to record follow metric");
        }

        Ok(FollowView::from(&follow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::id::UuidV7Generator;
    use crate::adapters::memory::{InMemoryFollowRepository, InMemoryMetrics};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    struct Fixture {
        handler: FollowUserHandler,
        follows: Arc<InMemoryFollowRepository>,
        metrics: Arc<InMemoryMetrics>,
    }

    fn fixture() -> Fixture {
        let follows = Arc::new(InMemoryFollowRepository::new());
        let metrics = Arc::new(InMemoryMetrics::new());
        Fixture {
            handler: FollowUserHandler::new(
                follows.clone(),
                Arc::new(UuidV7Generator::new()),
                metrics.clone(),
            ),
            follows,
            metrics,
        }
    }

    #[tokio::test]
    async fn user_follows_another_user() {
        let f = fixture();
        let view = f
            .handler
            .handle(FollowUserCommand {
                follower_id: user("alice"),
                followee_id: user("bob"),
            })
            .await
            .unwrap();

        assert_eq!(view.follower_id, user("alice"));
        assert_eq!(view.followee_id, user("bob"));
        assert_eq!(f.follows.len(), 1);
        assert_eq!(f.metrics.count(SocialCounter::FollowsCreated), 1);
    }

    #[tokio::test]
    async fn self_follow_is_rejected() {
        let f = fixture();
        let err = f
            .handler
            .handle(FollowUserCommand {
                follower_id: user("alice"),
                followee_id: user("alice"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::SelfReference(_)));
        assert!(f.follows.is_empty());
    }

    #[tokio::test]
    async fn duplicate_follow_is_already_exists() {
        let f = fixture();
        let cmd = FollowUserCommand {
            follower_id: user("alice"),
            followee_id: user("bob"),
        };
        f.handler.handle(cmd.clone()).await.unwrap();

        let err = f.handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, SocialError::AlreadyExists(_)));
        assert_eq!(f.follows.len(), 1);
    }

    #[tokio::test]
    async fn reverse_direction_is_a_distinct_follow() {
        let f = fixture();
        f.handler
            .handle(FollowUserCommand {
                follower_id: user("alice"),
                followee_id: user("bob"),
            })
            .await
            .unwrap();
        f.handler
            .handle(FollowUserCommand {
                follower_id: user("bob"),
                followee_id: user("alice"),
            })
            .await
            .unwrap();
        assert_eq!(f.follows.len(), 2);
    }
}
