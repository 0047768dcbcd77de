//! Application state.
//!
//! [`AppState`] holds everything the controller mutates. The list view,
//! match count and navigation availability are derived from it on demand and
//! never stored.

use dex_model::{EvolutionSplit, FilterState, NameSet, RecordDetail, RecordSummary};
use dex_query::{VisibleRecords, filter_and_sort, paginate};

/// Outstanding work, one flag per kind of fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    /// The initial listing is in flight.
    pub initializing: bool,
    /// A detail fetch is in flight.
    pub detail: bool,
    /// The type name set for the current type key is in flight.
    pub type_names: bool,
    /// The habitat name set for the current habitat key is in flight.
    pub habitat_names: bool,
    /// Lineage for the selected record is in flight.
    pub lineage: bool,
}

/// All mutable controller state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Every known record, in service order.
    pub records: Vec<RecordSummary>,
    /// User-controlled filter, sort and page size.
    pub filter: FilterState,
    /// Names matching the current type key; `None` until it arrives.
    pub type_set: Option<NameSet>,
    /// Names matching the current habitat key; `None` until it arrives.
    pub habitat_set: Option<NameSet>,
    /// Record shown in the detail view.
    pub selected: Option<RecordDetail>,
    /// Lineage of the selected record.
    pub lineage: EvolutionSplit,
    /// Whether the detail view is open.
    pub detail_open: bool,
    /// Message from the last failed detail fetch.
    pub detail_error: Option<String>,
    /// In-flight work.
    pub loading: LoadingFlags,
    /// Identity of the detail request whose answer will be accepted.
    pub pending_detail: Option<u64>,
    /// Source of detail request identities.
    pub(crate) next_request: u64,
}

impl AppState {
    /// Filtered and sorted records, before pagination.
    #[must_use]
    pub fn filtered(&self) -> Vec<&RecordSummary> {
        filter_and_sort(
            &self.records,
            &self.filter,
            self.type_set.as_ref(),
            self.habitat_set.as_ref(),
        )
    }

    /// The page currently on screen.
    #[must_use]
    pub fn visible(&self) -> VisibleRecords<'_> {
        paginate(&self.filtered(), self.filter.page_size)
    }

    /// Number of records matching the filter.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.filtered().len()
    }

    /// Whether "load more" would show further records.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible().has_more()
    }

    /// Position of the selected record in the filtered list.
    ///
    /// `None` when nothing is selected or the selection is filtered out.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.filtered()
            .iter()
            .position(|record| record.id == selected.id)
    }

    /// Filtered neighbour before the selection.
    #[must_use]
    pub fn previous_record(&self) -> Option<&RecordSummary> {
        let index = self.current_index()?;
        index
            .checked_sub(1)
            .and_then(|prev| self.filtered().get(prev).copied())
    }

    /// Filtered neighbour after the selection.
    #[must_use]
    pub fn next_record(&self) -> Option<&RecordSummary> {
        let index = self.current_index()?;
        self.filtered().get(index + 1).copied()
    }

    /// Whether "previous" has somewhere to go.
    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.previous_record().is_some()
    }

    /// Whether "next" has somewhere to go.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.next_record().is_some()
    }

    /// Whether either filter name set is being fetched.
    #[must_use]
    pub fn is_loading_filter_data(&self) -> bool {
        self.loading.type_names || self.loading.habitat_names
    }

    /// Whether anything the list or detail view waits on is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.loading.initializing || self.loading.detail || self.is_loading_filter_data()
    }

    /// Allocates the identity for a new detail request and marks it pending.
    ///
    /// Any message left by an earlier failed request is cleared.
    pub(crate) fn begin_detail_request(&mut self) -> u64 {
        self.next_request += 1;
        self.detail_error = None;
        self.pending_detail = Some(self.next_request);
        self.loading.detail = true;
        self.next_request
    }
}
