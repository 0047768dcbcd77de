//! Pure view computations over the Dexview catalog.
//!
//! Nothing in this crate performs I/O or keeps state between calls:
//!
//! - [`filter`]: search, region, type, habitat and legendary predicates plus
//!   the result ordering
//! - [`page`]: truncation of the ordered result to the current page size
//! - [`lineage`]: splitting an evolution tree around one species
//!
//! # Example
//!
//! ```
//! use dex_model::{FilterState, RecordSummary};
//! use dex_query::compute_visible;
//!
//! let records = vec![
//!     RecordSummary::new(1, "bulbasaur"),
//!     RecordSummary::new(25, "pikachu"),
//! ];
//! let mut filter = FilterState::default();
//! filter.set_search("pika");
//!
//! let visible = compute_visible(&records, &filter, None, None);
//! assert_eq!(visible.items.len(), 1);
//! assert!(!visible.has_more());
//! ```

pub mod filter;
pub mod lineage;
pub mod page;

pub use filter::{Predicates, compare_names, filter_and_sort, sort_records};
pub use lineage::{Lineage, resolve_lineage};
pub use page::{VisibleRecords, compute_visible, paginate};
