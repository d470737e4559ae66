//! Pagination contract shared by every list operation.
//!
//! Pages are 1-based. Repositories return `(total_count, items)` for a page;
//! `Page` packages that with the request so callers can compute `has_next`
//! without a second query.

use serde::{Deserialize, Serialize};

/// Default page size when a request does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 20;

/// A request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,

    /// Maximum results per page.
    pub items_per_page: u32,
}

impl PageRequest {
    /// Creates a page request, clamping page to at least 1 and
    /// items_per_page to at least 1.
    pub fn new(page: u32, items_per_page: u32) -> Self {
        Self {
            page: page.max(1),
            items_per_page: items_per_page.max(1),
        }
    }

    /// Number of results to skip: (page - 1) * items_per_page.
    ///
    /// The fields are public and the type deserializes, so a request can
    /// exist with `page == 0` despite the constructor clamp; such a
    /// request reads as page 1.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.items_per_page)
    }

    /// Maximum number of results in this page.
    pub fn limit(&self) -> u64 {
        u64::from(self.items_per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_ITEMS_PER_PAGE)
    }
}

/// One page of results plus the unpaginated total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this page, ordered newest-first unless noted otherwise.
    pub items: Vec<T>,

    /// Total number of matching items across all pages.
    pub total_count: u64,

    /// The request that produced this page.
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// Creates a page from a repository `(total_count, items)` result.
    pub fn new(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            request,
        }
    }

    /// Whether a further page exists: page * items_per_page < total_count.
    pub fn has_next(&self) -> bool {
        u64::from(self.request.page) * u64::from(self.request.items_per_page) < self.total_count
    }

    /// Maps each item, preserving the pagination envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            request: self.request,
        }
    }
}
