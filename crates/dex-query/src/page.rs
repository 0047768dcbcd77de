//! Pagination of the filtered result.

use dex_model::{FilterState, NameSet, RecordSummary};

use crate::filter::filter_and_sort;

/// The displayed page of the filtered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRecords<'a> {
    /// First `page_size` records of the filtered, sorted sequence.
    pub items: Vec<&'a RecordSummary>,
    /// Length of the filtered sequence before truncation.
    pub filtered_total: usize,
}

impl VisibleRecords<'_> {
    /// Whether "load more" would reveal further records.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.items.len() < self.filtered_total
    }
}

/// Truncates an already filtered and sorted sequence to `page_size`.
#[must_use]
pub fn paginate<'a>(filtered: &[&'a RecordSummary], page_size: usize) -> VisibleRecords<'a> {
    VisibleRecords {
        items: filtered.iter().take(page_size).copied().collect(),
        filtered_total: filtered.len(),
    }
}

/// Filters, sorts and paginates in one step.
#[must_use]
pub fn compute_visible<'a>(
    records: &'a [RecordSummary],
    filter: &FilterState,
    type_set: Option<&NameSet>,
    habitat_set: Option<&NameSet>,
) -> VisibleRecords<'a> {
    let filtered = filter_and_sort(records, filter, type_set, habitat_set);
    paginate(&filtered, filter.page_size)
}
