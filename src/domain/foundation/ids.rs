//! Strongly-typed identifier value objects.
//!
//! All identifiers are opaque strings generated externally (see the
//! `IdGenerator` port). Generated values sort lexically by creation time,
//! but nothing in the domain depends on their internal structure beyond
//! being non-empty.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning an error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a like.
    LikeId,
    "like_id"
);

string_id!(
    /// Unique identifier for a comment.
    CommentId,
    "comment_id"
);

string_id!(
    /// Unique identifier for a bookmark.
    BookmarkId,
    "bookmark_id"
);

string_id!(
    /// Unique identifier for a follow relationship.
    FollowId,
    "follow_id"
);

string_id!(
    /// Identifier for a curriculum (owned by the curriculum subsystem).
    CurriculumId,
    "curriculum_id"
);

string_id!(
    /// User identifier (typically from the auth provider).
    UserId,
    "user_id"
);

string_id!(
    /// Unique identifier for a curriculum tag.
    TagId,
    "tag_id"
);

string_id!(
    /// Unique identifier for a curriculum category.
    CategoryId,
    "category_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_id_accepts_non_empty_string() {
        let id = LikeId::new("like-123").unwrap();
        assert_eq!(id.as_str(), "like-123");
    }

    #[test]
    fn like_id_rejects_empty_string() {
        let result = LikeId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "like_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn user_id_displays_inner_value() {
        let id = UserId::new("user-456").unwrap();
        assert_eq!(format!("{}", id), "user-456");
    }

    #[test]
    fn curriculum_id_equality_is_by_value() {
        let a = CurriculumId::new("curr-1").unwrap();
        let b = CurriculumId::new("curr-1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ids_sort_lexically() {
        let earlier = CommentId::new("01H0000000000000000000000A").unwrap();
        let later = CommentId::new("01H0000000000000000000000B").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn id_serializes_transparently() {
        let id = BookmarkId::new("bm-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bm-1\"");
    }
}
