//! In-memory adapters for tests and local development.
//!
//! The repositories enforce the same composite-key uniqueness a relational
//! schema would, so tests exercise the real conflict paths.

mod bookmark;
mod comment;
mod curriculum;
mod follow;
mod like;
mod metrics;

pub use bookmark::InMemoryBookmarkRepository;
pub use comment::InMemoryCommentRepository;
pub use curriculum::InMemoryCurriculumReader;
pub use follow::InMemoryFollowRepository;
pub use like::InMemoryLikeRepository;
pub use metrics::InMemoryMetrics;
