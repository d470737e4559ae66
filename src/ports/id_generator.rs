//! Identifier generator port.

/// Produces globally unique, lexically sortable string identifiers.
///
/// Sortability means ids created later compare greater as plain strings,
/// which keeps newest-first orderings stable without a secondary sort key.
pub trait IdGenerator: Send + Sync {
    /// Generate a fresh identifier.
    fn generate(&self) -> String;
}
