//! Data model for the Dexview creature catalog.
//!
//! This crate provides the types shared by every other Dexview crate:
//!
//! - [`record`]: catalog records (summary and lazily fetched detail)
//! - [`evolution`]: evolution trees as supplied by the data service, and the
//!   derived lineage split shown next to a detail view
//! - [`filter`]: the user-controlled filter, sort and pagination state
//! - [`catalog`]: fixed enumerations (regions, types, habitats, the
//!   legendary allowlist)
//! - [`resource`]: helpers for the service's resource locators
//!
//! # Example
//!
//! ```
//! use dex_model::{FilterState, KeyFilter, SortOrder, is_legendary};
//!
//! let mut filter = FilterState::default();
//! filter.region = KeyFilter::only("kanto");
//! filter.sort_order = SortOrder::Name;
//!
//! assert!(is_legendary(150));
//! assert!(!filter.region.is_all());
//! ```

pub mod catalog;
pub mod error;
pub mod evolution;
pub mod filter;
pub mod record;
pub mod resource;

pub use catalog::{
    HABITATS, LEGENDARY_IDS, REGIONS, Region, TYPES, find_region, is_known_habitat, is_known_type,
    is_legendary,
};
pub use error::{ModelError, Result};
pub use evolution::{EvolutionNode, EvolutionSplit, EvolutionStage};
pub use filter::{BASE_PAGE_SIZE, FilterState, KeyFilter, NameSet, PAGE_INCREMENT, SortOrder};
pub use record::{
    FALLBACK_IMAGE_URL, RecordDetail, RecordRef, RecordSummary, Sprites, StatName, scaled_measure,
};
pub use resource::id_from_resource_url;
