//! In-memory metrics sink for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{MetricsSink, SocialCounter};

/// Recording `MetricsSink` implementation.
///
/// Counts increments for assertions and can be switched into a failing
/// mode to verify that callers swallow sink errors. Testing only; methods
/// panic on poisoned locks.
pub struct InMemoryMetrics {
    counts: RwLock<HashMap<SocialCounter, u64>>,
    fail: bool,
}

impl InMemoryMetrics {
    /// Creates a recording sink.
    pub fn new() -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
            fail: false,
        }
    }

    /// Creates a sink whose increments always fail.
    pub fn failing() -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
            fail: true,
        }
    }

    /// Current value of a counter.
    pub fn count(&self, counter: SocialCounter) -> u64 {
        *self
            .counts
            .read()
            .expect("counts lock poisoned")
            .get(&counter)
            .unwrap_or(&0)
    }
}

impl Default for InMemoryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsSink for InMemoryMetrics {
    async fn increment(&self, counter: SocialCounter) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                crate::domain::foundation::ErrorCode::InternalError,
                "Simulated metrics failure",
            ));
        }
        *self
            .counts
            .write()
            .expect("counts lock poisoned")
            .entry(counter)
            .or_insert(0) += 1;
        Ok(())
    }
}
