//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the role enum, pagination contract types, and
//! error types that form the vocabulary of the social interaction core.

mod errors;
mod ids;
mod pagination;
mod role;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    BookmarkId, CategoryId, CommentId, CurriculumId, FollowId, LikeId, TagId, UserId,
};
pub use pagination::{Page, PageRequest, DEFAULT_ITEMS_PER_PAGE};
pub use role::Role;
pub use timestamp::Timestamp;
