//! The paginated result envelope returned by `fetch_all`.

use serde::{Deserialize, Serialize};

use super::Record;

/// One page of records plus the pagination metadata.
///
/// `total` counts records after filtering and before pagination.
/// `total_pages` is `ceil(total / page_size)`, so it is zero exactly when
/// `total` is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    /// The records on this page, in query order.
    pub records: Vec<Record>,

    /// Number of records matching the query.
    pub total: usize,

    /// 1-based page number.
    pub page: u32,

    /// Requested page size.
    pub page_size: u32,

    /// Number of pages for `total` at `page_size`.
    pub total_pages: usize,
}

impl ResultEnvelope {
    /// An envelope with no records.
    pub fn empty(page: u32, page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            page,
            page_size,
            total_pages: 0,
        }
    }

    /// True if there is a page after this one.
    pub fn has_next(&self) -> bool {
        (self.page as usize) < self.total_pages
    }

    /// True if there is a page before this one.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_envelope_shape() {
        let envelope = ResultEnvelope::empty(1, 10);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"records": [], "total": 0, "page": 1, "pageSize": 10, "totalPages": 0})
        );
        assert!(!envelope.has_next());
        assert!(!envelope.has_previous());
    }

    #[test]
    fn test_page_navigation() {
        let envelope = ResultEnvelope {
            records: vec![],
            total: 25,
            page: 2,
            page_size: 10,
            total_pages: 3,
        };
        assert!(envelope.has_next());
        assert!(envelope.has_previous());
    }
}
