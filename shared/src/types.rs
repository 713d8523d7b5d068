//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// One page of records from a list endpoint
///
/// Every list endpoint responds with this shape: the page of results
/// plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Pagination parameters for list requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub page_size: u32,
}

impl ListParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Total pages for a given record count, never less than 1
    pub fn total_pages(&self, count: u64) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = count.div_ceil(u64::from(self.page_size));
        pages.max(1) as u32
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

/// Date range for report queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let params = ListParams::new(1, 10);
        assert_eq!(params.total_pages(0), 1);
        assert_eq!(params.total_pages(10), 1);
        assert_eq!(params.total_pages(11), 2);
        assert_eq!(params.total_pages(115), 12);
    }
}
