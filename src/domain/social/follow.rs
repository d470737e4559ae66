//! Follow relationship entity.

use serde::{Deserialize, Serialize};

use super::errors::SocialError;
use crate::domain::foundation::{FollowId, Timestamp, UserId};

/// Directional follow between two users.
///
/// # Invariants
///
/// - `follower_id != followee_id`, checked at construction
/// - at most one follow per ordered (follower_id, followee_id) pair,
///   guarded by the storage layer's composite key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    id: FollowId,
    follower_id: UserId,
    followee_id: UserId,
    created_at: Timestamp,
}

impl Follow {
    /// Creates a follow relationship.
    ///
    /// # Errors
    ///
    /// - `SelfReference` when follower and followee are the same user
    pub fn new(
        id: FollowId,
        follower_id: UserId,
        followee_id: UserId,
        created_at: Timestamp,
    ) -> Result<Self, SocialError> {
        if follower_id == followee_id {
            return Err(SocialError::self_reference(follower_id));
        }
        Ok(Self {
            id,
            follower_id,
            followee_id,
            created_at,
        })
    }

    /// Reconstitute a follow from persistence.
    ///
    /// Persisted rows already satisfied the irreflexivity check.
    pub fn reconstitute(
        id: FollowId,
        follower_id: UserId,
        followee_id: UserId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            follower_id,
            followee_id,
            created_at,
        }
    }

    /// Returns the follow ID.
    pub fn id(&self) -> &FollowId {
        &self.id
    }

    /// Returns the following user's ID.
    pub fn follower_id(&self) -> &UserId {
        &self.follower_id
    }

    /// Returns the followed user's ID.
    pub fn followee_id(&self) -> &UserId {
        &self.followee_id
    }

    /// Returns when the follow was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks whether the given user is the follower side.
    pub fn is_follower(&self, user_id: &UserId) -> bool {
        &self.follower_id == user_id
    }

    /// Checks whether the given user is the followed side.
    pub fn is_followee(&self, user_id: &UserId) -> bool {
        &self.followee_id == user_id
    }

    /// Checks whether the given user appears on either side.
    pub fn involves_user(&self, user_id: &UserId) -> bool {
        self.is_follower(user_id) || self.is_followee(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn follow(follower: &str, followee: &str) -> Follow {
        Follow::new(
            FollowId::new("follow-1").unwrap(),
            user(follower),
            user(followee),
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn self_follow_is_rejected() {
        let result = Follow::new(
            FollowId::new("follow-1").unwrap(),
            user("user-1"),
            user("user-1"),
            Timestamp::now(),
        );
        assert!(matches!(result, Err(SocialError::SelfReference(_))));
    }

    #[test]
    fn self_follow_is_rejected_for_any_id_value() {
        for id in ["a", "admin", "ユーザー", "user with spaces"] {
            let result = Follow::new(
                FollowId::new("follow-1").unwrap(),
                user(id),
                user(id),
                Timestamp::now(),
            );
            assert!(result.is_err(), "self-follow accepted for id {:?}", id);
        }
    }

    #[test]
    fn is_follower_and_is_followee_are_directional() {
        let f = follow("alice", "bob");
        assert!(f.is_follower(&user("alice")));
        assert!(!f.is_follower(&user("bob")));
        assert!(f.is_followee(&user("bob")));
        assert!(!f.is_followee(&user("alice")));
    }

    #[test]
    fn involves_user_covers_both_sides() {
        let f = follow("alice", "bob");
        assert!(f.involves_user(&user("alice")));
        assert!(f.involves_user(&user("bob")));
        assert!(!f.involves_user(&user("carol")));
    }
}
