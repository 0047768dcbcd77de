//! Message hierarchy.
//!
//! Every user action and every fetch completion is a [`Message`]. The
//! controller processes them one at a time in [`crate::App::update`].

use dex_model::{
    EvolutionSplit, KeyFilter, NameSet, RecordDetail, RecordRef, RecordSummary, SortOrder,
};

/// Root message enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Startup and fetch completions.
    Catalog(CatalogMessage),
    /// Filter panel actions.
    Filter(FilterMessage),
    /// Detail view selection and navigation.
    Selection(SelectionMessage),
}

/// Startup and fetch completions.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogMessage {
    /// Begin loading the catalog.
    Start,
    /// The listing finished. Empty on failure.
    RecordsLoaded(Vec<RecordSummary>),
    /// Name set for a type key arrived.
    TypeNamesLoaded { key: String, names: NameSet },
    /// Name set for a habitat key arrived.
    HabitatNamesLoaded { key: String, names: NameSet },
    /// A detail fetch finished.
    DetailLoaded {
        request: u64,
        result: Result<RecordDetail, String>,
    },
    /// Lineage for a record finished.
    LineageLoaded {
        record_id: u32,
        split: EvolutionSplit,
    },
}

/// Filter panel actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    /// New search text; resets the page size when it differs.
    SearchChanged(String),
    /// Region choice.
    RegionSelected(KeyFilter),
    /// Type choice; fetches the name set for a new key.
    TypeSelected(KeyFilter),
    /// Habitat choice; fetches the name set for a new key.
    HabitatSelected(KeyFilter),
    /// Legendary-only switch.
    LegendaryToggled(bool),
    /// Id or name ordering.
    SortOrderSelected(SortOrder),
    /// Grow the page by one increment.
    LoadMore,
    /// Reset every predicate; the sort order is kept.
    ClearFilters,
}

/// Detail view selection and navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMessage {
    /// Open a record by id or name.
    Select(RecordRef),
    /// Open the next record of the filtered list.
    Next,
    /// Open the previous record of the filtered list.
    Previous,
    /// Close the detail view.
    Back,
}

impl From<CatalogMessage> for Message {
    fn from(msg: CatalogMessage) -> Self {
        Self::Catalog(msg)
    }
}

impl From<FilterMessage> for Message {
    fn from(msg: FilterMessage) -> Self {
        Self::Filter(msg)
    }
}

impl From<SelectionMessage> for Message {
    fn from(msg: SelectionMessage) -> Self {
        Self::Selection(msg)
    }
}
