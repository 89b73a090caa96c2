//! Query options for listing a resource collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Descending order.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("invalid sort direction: {other}")),
        }
    }
}

/// Options for a `fetch_all` call: search, sort and pagination.
///
/// Constructed fresh per call. `page` and `page_size` are never zero; a zero
/// passed to the builder is replaced with the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    /// Case-insensitive substring to search for.
    pub search: Option<String>,

    /// Fields to search in. Empty means every text field of each record.
    pub searchable_fields: Vec<String>,

    /// Field to sort by.
    pub sort_field: Option<String>,

    /// Sort direction.
    pub sort_direction: SortDirection,

    /// 1-based page number.
    pub page: u32,

    /// Records per page.
    pub page_size: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            search: None,
            searchable_fields: Vec::new(),
            sort_field: None,
            sort_direction: SortDirection::Ascending,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryOptions {
    /// Creates options with defaults (page 1, 10 per page, no search or sort).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sets the fields the search term is matched against.
    pub fn with_searchable_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the sort field and direction.
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = Some(field.into());
        self.sort_direction = direction;
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self
    }

    /// The page number, never zero.
    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    /// The page size, never zero.
    pub fn page_size(&self) -> u32 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// The search term, if it is not blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// The sort field, if it is not empty.
    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref().filter(|s| !s.is_empty())
    }
}
