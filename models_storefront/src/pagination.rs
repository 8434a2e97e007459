//! Page-number pagination for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters for paginated list endpoints. Both are optional;
/// out-of-range values are clamped rather than rejected.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page, capped at 100.
    pub page_size: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size())
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page() - 1) * self.limit()
    }
}

/// One page of results plus the total row count for the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, params: &PageParams) -> Self {
        Self {
            items,
            total,
            page: params.page(),
            page_size: params.page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_page_zero_is_clamped_to_one() {
        let params = PageParams {
            page: Some(0),
            page_size: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_page_size_is_capped() {
        let params = PageParams {
            page: Some(3),
            page_size: Some(500),
        };
        assert_eq!(params.page_size(), 100);
        assert_eq!(params.offset(), 200);
    }

    #[test]
    fn test_offset_advances_by_page_size() {
        let params = PageParams {
            page: Some(4),
            page_size: Some(25),
        };
        assert_eq!(params.limit(), 25);
        assert_eq!(params.offset(), 75);
    }
}
