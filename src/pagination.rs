//! This modules defines the common functionality for paging data.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum expenses to return per page when not specified in a request.
    pub default_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
        }
    }
}

/// Describes where a page sits in a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// The 1-based page number.
    pub page: u64,
    /// The maximum number of items on a page.
    pub limit: u64,
    /// The number of items across all pages.
    pub total: u64,
    /// The number of pages needed to show `total` items, zero when there are no items.
    pub total_pages: u64,
}

impl Pagination {
    /// Describe page `page` of `total` items split into pages of `limit` items.
    ///
    /// `page` and `limit` are clamped to at least 1.
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);

        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
        }
    }

    /// The index range of the items on this page within a list of `len` items.
    ///
    /// A page past the end of the list yields an empty range rather than an error.
    pub fn item_range(&self, len: usize) -> Range<usize> {
        let skip = (self.page - 1).saturating_mul(self.limit);
        let start = usize::try_from(skip).unwrap_or(usize::MAX).min(len);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(limit).min(len);

        start..end
    }
}
