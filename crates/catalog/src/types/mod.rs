//! Core types for the catalog data access layer.
//!
//! - [`Record`], [`FieldValue`] - One entity and its scalar fields
//! - [`QueryOptions`], [`SortDirection`] - Search, sort and paging input
//! - [`ResultEnvelope`] - One page of results with metadata
//! - [`ResourceType`] - The catalogue of known resource type keys
//!
//! # Example
//!
//! ```
//! use access_catalog::types::{QueryOptions, Record, SortDirection};
//!
//! let options = QueryOptions::new()
//!     .with_search("parker")
//!     .with_searchable_fields(["name", "email"])
//!     .with_sort("hireDate", SortDirection::Descending)
//!     .with_page_size(5);
//! assert_eq!(options.page(), 1);
//!
//! let record = Record::new().with("id", 1).with("name", "Patrick Parker");
//! assert!(record.matches_id("1"));
//! ```

mod envelope;
mod query;
mod record;
mod resource_type;

pub use envelope::ResultEnvelope;
pub use query::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, QueryOptions, SortDirection};
pub use record::{FieldValue, ID_FIELD, Record};
pub use resource_type::{RESOURCE_TYPES, ResourceType, resource_type};
