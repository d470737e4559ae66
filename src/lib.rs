//! Curricula Social - Social interaction core for a curriculum-sharing platform.
//!
//! Implements the authorization and consistency rules for likes, comments,
//! bookmarks and follows on shared curricula: who may act on a curriculum
//! (owner / public / admin), under which uniqueness and ownership invariants,
//! and how interaction entities are created and listed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
