//! Curriculum reader port.
//!
//! The curriculum aggregate lives in another subsystem; this port exposes
//! the one lookup the social core needs for its access checks.

use async_trait::async_trait;

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::{CurriculumId, DomainError, Role, UserId};

/// Reader port for curriculum lookups.
#[async_trait]
pub trait CurriculumReader: Send + Sync {
    /// Find a curriculum visible to the given caller.
    ///
    /// `owner_id` carries the requesting user when the role is not admin,
    /// letting the implementation apply its own visibility filter (owner
    /// rows plus public rows). Admins pass `None` and see every row.
    ///
    /// Returns `None` when the curriculum does not exist or is filtered
    /// out by the implementation's visibility rule.
    async fn find_by_id(
        &self,
        curriculum_id: &CurriculumId,
        role: Role,
        owner_id: Option<&UserId>,
    ) -> Result<Option<Curriculum>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn curriculum_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn CurriculumReader) {}
    }
}
