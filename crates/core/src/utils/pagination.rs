use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// A 1-based page request with the limit already clamped to `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Missing or non-positive limits fall back to the default page size, limits
    /// above the maximum are capped. Pages below 1 become page 1.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let limit = match limit {
            Some(l) if l > MAX_PAGE_SIZE => MAX_PAGE_SIZE,
            Some(l) if l > 0 => l,
            _ => DEFAULT_PAGE_SIZE,
        };
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        Self { page, limit }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`, never less than 1.
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 1;
        }
        ((total + self.limit - 1) / self.limit).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamping() {
        assert_eq!(Pagination::new(None, None).limit(), 20);
        assert_eq!(Pagination::new(None, Some(0)).limit(), 20);
        assert_eq!(Pagination::new(None, Some(-5)).limit(), 20);
        assert_eq!(Pagination::new(None, Some(101)).limit(), 100);
        assert_eq!(Pagination::new(None, Some(100)).limit(), 100);
        assert_eq!(Pagination::new(None, Some(1)).limit(), 1);
        assert_eq!(Pagination::new(None, Some(35)).limit(), 35);
    }

    #[test]
    fn test_page_defaults_and_offset() {
        let p = Pagination::new(None, Some(10));
        assert_eq!(p.page(), 1);
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(Some(3), Some(10));
        assert_eq!(p.offset(), 20);

        assert_eq!(Pagination::new(Some(0), None).page(), 1);
        assert_eq!(Pagination::new(Some(-2), None).page(), 1);
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(None, Some(20));
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(20), 1);
        assert_eq!(p.total_pages(21), 2);
        assert_eq!(p.total_pages(100), 5);
    }

    #[test]
    fn test_serializes_clamped_values() {
        let p = Pagination::new(Some(-4), Some(5000));
        assert_eq!(
            serde_json::to_value(p).unwrap(),
            serde_json::json!({ "page": 1, "limit": 100 })
        );
    }
}
