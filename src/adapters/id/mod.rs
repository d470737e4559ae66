//! Identifier generator adapter.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// UUIDv7-based identifier generator.
///
/// Version 7 embeds a millisecond timestamp in the high bits, so the
/// canonical string form sorts lexically by creation time.
pub struct UuidV7Generator;

impl UuidV7Generator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidV7Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidV7Generator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
