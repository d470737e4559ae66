//! In-memory curriculum reader for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::{CurriculumId, DomainError, Role, UserId};
use crate::ports::CurriculumReader;

/// Seedable `CurriculumReader` implementation.
///
/// Applies the same visibility filter a relational implementation would:
/// non-admin lookups only see rows that are public or owned by the caller.
/// Testing only; methods panic on poisoned locks.
pub struct InMemoryCurriculumReader {
    curricula: RwLock<HashMap<CurriculumId, Curriculum>>,
}

impl InMemoryCurriculumReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self {
            curricula: RwLock::new(HashMap::new()),
        }
    }

    /// Seeds a curriculum.
    pub fn insert(&self, curriculum: Curriculum) {
        self.curricula
            .write()
            .expect("curricula lock poisoned")
            .insert(curriculum.id().clone(), curriculum);
    }

    /// Removes a curriculum (for deleted-while-in-flight scenarios).
    pub fn remove(&self, curriculum_id: &CurriculumId) {
        self.curricula
            .write()
            .expect("curricula lock poisoned")
            .remove(curriculum_id);
    }
}

impl Default for InMemoryCurriculumReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CurriculumReader for InMemoryCurriculumReader {
    async fn find_by_id(
        &self,
        curriculum_id: &CurriculumId,
        _role: Role,
        owner_id: Option<&UserId>,
    ) -> Result<Option<Curriculum>, DomainError> {
        let curricula = self.curricula.read().expect("curricula lock poisoned");
        let Some(curriculum) = curricula.get(curriculum_id) else {
            return Ok(None);
        };
        // Visibility filter applies only when a caller id was supplied
        // (admins pass None and see everything).
        if let Some(owner_id) = owner_id {
            if !curriculum.is_public() && !curriculum.is_owned_by(owner_id) {
                return Ok(None);
            }
        }
        Ok(Some(curriculum.clone()))
    }
}
