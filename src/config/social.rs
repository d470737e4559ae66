//! Social interaction limits configuration

use serde::Deserialize;

use super::error::ConfigValidationError;
use crate::domain::foundation::{PageRequest, DEFAULT_ITEMS_PER_PAGE};
use crate::domain::social::MAX_CONTENT_LENGTH;

/// Pagination and content limits applied at the host boundary.
///
/// The handlers accept whatever `PageRequest` they are given; the
/// embedding host is expected to build requests through
/// [`SocialConfig::page_request`] so caller-supplied sizes stay inside
/// these limits.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialConfig {
    /// Page size used when the caller does not specify one
    #[serde(default = "default_items_per_page")]
    pub default_items_per_page: u32,

    /// Largest page size a caller may request
    #[serde(default = "default_max_items_per_page")]
    pub max_items_per_page: u32,

    /// Maximum comment length in characters the host accepts before
    /// handing content to the domain, which enforces its own ceiling
    #[serde(default = "default_max_comment_length")]
    pub max_comment_length: usize,
}

impl SocialConfig {
    /// Clamps a requested page size into the configured bounds.
    pub fn clamp_items_per_page(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_items_per_page)
            .clamp(1, self.max_items_per_page)
    }

    /// Builds a `PageRequest` with the page size clamped into the
    /// configured bounds. Hosts should construct list-query requests
    /// through this rather than `PageRequest::new` directly.
    pub fn page_request(&self, page: u32, items_per_page: Option<u32>) -> PageRequest {
        PageRequest::new(page, self.clamp_items_per_page(items_per_page))
    }

    /// Validate social configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.default_items_per_page == 0 {
            return Err(ConfigValidationError::InvalidDefaultPageSize);
        }
        if self.default_items_per_page > self.max_items_per_page {
            return Err(ConfigValidationError::DefaultExceedsMaxPageSize);
        }
        if self.max_items_per_page > 100 {
            return Err(ConfigValidationError::PageSizeTooLarge);
        }
        if self.max_comment_length == 0 || self.max_comment_length > MAX_CONTENT_LENGTH {
            return Err(ConfigValidationError::InvalidCommentLength(
                MAX_CONTENT_LENGTH,
            ));
        }
        Ok(())
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            default_items_per_page: default_items_per_page(),
            max_items_per_page: default_max_items_per_page(),
            max_comment_length: default_max_comment_length(),
        }
    }
}

fn default_items_per_page() -> u32 {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_max_items_per_page() -> u32 {
    100
}

fn default_max_comment_length() -> usize {
    MAX_CONTENT_LENGTH
}
