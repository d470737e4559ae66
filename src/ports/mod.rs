//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `LikeRepository` / `CommentRepository` / `BookmarkRepository` /
//!   `FollowRepository` - persistence per interaction entity family
//!
//! ## Collaborator Ports
//!
//! - `CurriculumReader` - lookup into the externally-owned curriculum
//!   aggregate for access checks
//! - `IdGenerator` - lexically sortable identifier source
//! - `MetricsSink` - fire-and-forget creation counters

mod bookmark_repository;
mod comment_repository;
mod curriculum_reader;
mod follow_repository;
mod id_generator;
mod like_repository;
mod metrics;

pub use bookmark_repository::BookmarkRepository;
pub use comment_repository::CommentRepository;
pub use curriculum_reader::CurriculumReader;
pub use follow_repository::FollowRepository;
pub use id_generator::IdGenerator;
pub use like_repository::LikeRepository;
pub use metrics::{MetricsSink, SocialCounter};
