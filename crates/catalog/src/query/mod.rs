//! The query pipeline shared by every provider.
//!
//! A listing request runs three pure steps over an in-memory collection, in a
//! fixed order:
//!
//! ```text
//! records ──▶ filter (search) ──▶ sort (field, direction) ──▶ paginate ──▶ ResultEnvelope
//! ```
//!
//! Filtering shrinks the candidate set before sorting, and pagination slices
//! the filtered, sorted sequence. None of the steps perform I/O.
//!
//! # Example
//!
//! ```
//! use access_catalog::query;
//! use access_catalog::types::{QueryOptions, Record, SortDirection};
//!
//! let records: Vec<Record> = (1..=25)
//!     .map(|i| Record::new().with("id", i).with("name", format!("PC-{i:02}")))
//!     .collect();
//!
//! let options = QueryOptions::new()
//!     .with_search("pc-1")
//!     .with_sort("name", SortDirection::Descending)
//!     .with_page_size(4);
//! let page = query::process(&records, &options);
//!
//! assert_eq!(page.total, 10);
//! assert_eq!(page.total_pages, 3);
//! assert!(page.records[0].matches_id("19"));
//! ```

pub mod date;
mod filter;
mod paginate;
mod sort;

pub use filter::filter;
pub use paginate::paginate;
pub use sort::{locale_compare, sort};

use crate::types::{QueryOptions, Record, ResultEnvelope};

/// Runs filter, sort and paginate over `records`.
///
/// Only the records on the returned page are cloned.
pub fn process<'a, I>(records: I, options: &QueryOptions) -> ResultEnvelope
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut candidates: Vec<&Record> = records.into_iter().collect();

    if let Some(term) = options.search_term() {
        candidates = filter(candidates, term, &options.searchable_fields);
    }
    if let Some(field) = options.sort_field() {
        candidates = sort(candidates, field, options.sort_direction);
    }

    paginate(&candidates, options.page(), options.page_size())
}
