//! Domain layer - entities, value objects, and the social authorization core.

pub mod curriculum;
pub mod foundation;
pub mod social;
pub mod user;
