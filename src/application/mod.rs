//! Application layer - command/query handlers orchestrating the domain
//! service and repositories.

pub mod handlers;
