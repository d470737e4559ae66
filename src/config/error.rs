//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("default_items_per_page must be at least 1")]
    InvalidDefaultPageSize,

    #[error("default_items_per_page exceeds max_items_per_page")]
    DefaultExceedsMaxPageSize,

    #[error("max_items_per_page exceeds the allowed ceiling (100)")]
    PageSizeTooLarge,

    #[error("max_comment_length must be between 1 and {0}")]
    InvalidCommentLength(usize),
}
