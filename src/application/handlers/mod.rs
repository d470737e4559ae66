//! Command and query handlers.
//!
//! One handler per operation. Every handler takes its ports by
//! `Arc<dyn Trait>` constructor injection and returns DTO views, never
//! domain entities.

pub mod bookmark;
pub mod comment;
pub mod follow;
pub mod like;
pub mod stats;
