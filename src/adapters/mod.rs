//! Adapters - Implementations of the ports.
//!
//! Only the test-grade set ships with this crate: in-memory repositories
//! and the UUIDv7 id generator. Relational and HTTP adapters belong to the
//! host application.

pub mod id;
pub mod memory;
