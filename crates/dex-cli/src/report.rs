//! Command outcomes, independent of how they are printed.

use serde::Serialize;

use dex_app::AppState;
use dex_model::{EvolutionSplit, FilterState, RecordDetail, RecordSummary};

/// The visible page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListReport {
    /// Filter the page was computed with.
    pub filter: FilterState,
    /// Records matching the filter.
    pub match_count: usize,
    /// Whether another page is available.
    pub has_more: bool,
    /// Records on the page, in display order.
    pub records: Vec<RecordSummary>,
}

impl ListReport {
    pub fn from_state(state: &AppState) -> Self {
        let visible = state.visible();
        Self {
            filter: state.filter.clone(),
            match_count: visible.filtered_total,
            has_more: visible.has_more(),
            records: visible.items.into_iter().cloned().collect(),
        }
    }
}

/// One record with its lineage and list neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowReport {
    pub detail: RecordDetail,
    pub lineage: EvolutionSplit,
    /// Filtered neighbour before the record, if any.
    pub previous: Option<RecordSummary>,
    /// Filtered neighbour after the record, if any.
    pub next: Option<RecordSummary>,
}

impl ShowReport {
    /// Builds the report for the selected record; `None` without a selection.
    pub fn from_state(state: &AppState) -> Option<Self> {
        let detail = state.selected.clone()?;
        Some(Self {
            detail,
            lineage: state.lineage.clone(),
            previous: state.previous_record().cloned(),
            next: state.next_record().cloned(),
        })
    }
}
