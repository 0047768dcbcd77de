//! Filter predicates and result ordering.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use dex_model::{
    FilterState, KeyFilter, NameSet, RecordSummary, SortOrder, find_region, is_legendary,
};

/// The active predicates of one filter state, prepared once per recomputation.
///
/// Every predicate is a no-op when its dimension is inactive. A keyed
/// dimension whose name set has not arrived yet is also a no-op, so the list
/// narrows only once the set is loaded.
#[derive(Debug, Clone)]
pub struct Predicates<'s> {
    query: Option<String>,
    region: Option<RangeInclusive<u32>>,
    type_set: Option<&'s NameSet>,
    habitat_set: Option<&'s NameSet>,
    legendary_only: bool,
}

impl<'s> Predicates<'s> {
    /// Prepares the predicates for `filter`.
    ///
    /// Unknown region keys leave the region dimension unconstrained.
    #[must_use]
    pub fn new(
        filter: &FilterState,
        type_set: Option<&'s NameSet>,
        habitat_set: Option<&'s NameSet>,
    ) -> Self {
        let query = filter.search_query.trim().to_lowercase();
        Self {
            query: (!query.is_empty()).then_some(query),
            region: filter
                .region
                .key()
                .and_then(find_region)
                .map(|region| region.id_range()),
            type_set: active_set(&filter.type_key, type_set),
            habitat_set: active_set(&filter.habitat, habitat_set),
            legendary_only: filter.legendary_only,
        }
    }

    /// Case-insensitive name substring, or exact decimal id.
    #[must_use]
    pub fn matches_search(&self, record: &RecordSummary) -> bool {
        self.query.as_deref().is_none_or(|query| {
            record.name.to_lowercase().contains(query) || record.id.to_string() == query
        })
    }

    /// Inclusive region id range.
    #[must_use]
    pub fn matches_region(&self, record: &RecordSummary) -> bool {
        self.region
            .as_ref()
            .is_none_or(|range| range.contains(&record.id))
    }

    /// Membership in the loaded type name set.
    #[must_use]
    pub fn matches_type(&self, record: &RecordSummary) -> bool {
        self.type_set.is_none_or(|set| set.contains(&record.name))
    }

    /// Membership in the loaded habitat name set.
    #[must_use]
    pub fn matches_habitat(&self, record: &RecordSummary) -> bool {
        self.habitat_set
            .is_none_or(|set| set.contains(&record.name))
    }

    /// Legendary allowlist.
    #[must_use]
    pub fn matches_legendary(&self, record: &RecordSummary) -> bool {
        !self.legendary_only || is_legendary(record.id)
    }

    /// Conjunction of all predicates.
    #[must_use]
    pub fn matches(&self, record: &RecordSummary) -> bool {
        self.matches_search(record)
            && self.matches_region(record)
            && self.matches_type(record)
            && self.matches_habitat(record)
            && self.matches_legendary(record)
    }
}

fn active_set<'s>(selection: &KeyFilter, set: Option<&'s NameSet>) -> Option<&'s NameSet> {
    if selection.is_all() { None } else { set }
}

/// Compares two names for display ordering.
///
/// Case-insensitive over full Unicode lowercase mappings, with the exact
/// string as tiebreaker so the order is total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Sorts records in place. Both orders are total, so the sort is deterministic.
pub fn sort_records(records: &mut [&RecordSummary], order: SortOrder) {
    match order {
        SortOrder::Id => records.sort_by_key(|record| record.id),
        SortOrder::Name => records.sort_by(|a, b| {
            compare_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id))
        }),
    }
}

/// Applies every active predicate, then sorts.
///
/// Returns the full filtered sequence, before pagination.
#[must_use]
pub fn filter_and_sort<'a>(
    records: &'a [RecordSummary],
    filter: &FilterState,
    type_set: Option<&NameSet>,
    habitat_set: Option<&NameSet>,
) -> Vec<&'a RecordSummary> {
    let predicates = Predicates::new(filter, type_set, habitat_set);
    let mut matched: Vec<&RecordSummary> = records
        .iter()
        .filter(|record| predicates.matches(record))
        .collect();
    sort_records(&mut matched, filter.sort_order);

    tracing::trace!(
        total = records.len(),
        matched = matched.len(),
        sort = %filter.sort_order,
        "Recomputed filtered records"
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RecordSummary> {
        vec![
            RecordSummary::new(25, "pikachu"),
            RecordSummary::new(1, "bulbasaur"),
            RecordSummary::new(150, "mewtwo"),
            RecordSummary::new(151, "mew"),
            RecordSummary::new(152, "chikorita"),
            RecordSummary::new(250, "ho-oh"),
            RecordSummary::new(125, "electabuzz"),
        ]
    }

    fn names(list: &[&RecordSummary]) -> Vec<String> {
        list.iter().map(|record| record.name.clone()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_sorted_by_id() {
        let all = records();
        let result = filter_and_sort(&all, &FilterState::default(), None, None);
        let ids: Vec<u32> = result.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![1, 25, 125, 150, 151, 152, 250]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let all = records();
        let mut filter = FilterState::default();
        filter.set_search("  PIKA ");
        let result = filter_and_sort(&all, &filter, None, None);
        assert_eq!(names(&result), vec!["pikachu"]);
    }

    #[test]
    fn test_search_matches_exact_id_only() {
        let all = records();
        let mut filter = FilterState::default();
        filter.set_search("25");
        let result = filter_and_sort(&all, &filter, None, None);
        // 125 and 250 contain "25" in their id but are not exact matches.
        assert_eq!(names(&result), vec!["pikachu"]);
    }

    #[test]
    fn test_whitespace_search_is_noop() {
        let all = records();
        let mut filter = FilterState::default();
        filter.set_search("   ");
        assert_eq!(filter_and_sort(&all, &filter, None, None).len(), all.len());
    }

    #[test]
    fn test_region_range_inclusive() {
        let all = vec![
            RecordSummary::new(0, "zero"),
            RecordSummary::new(1, "bulbasaur"),
            RecordSummary::new(151, "mew"),
            RecordSummary::new(152, "chikorita"),
        ];
        let filter = FilterState {
            region: KeyFilter::only("kanto"),
            ..FilterState::default()
        };
        let result = filter_and_sort(&all, &filter, None, None);
        assert_eq!(names(&result), vec!["bulbasaur", "mew"]);
    }

    #[test]
    fn test_unknown_region_is_noop() {
        let all = records();
        let filter = FilterState {
            region: KeyFilter::only("orre"),
            ..FilterState::default()
        };
        assert_eq!(filter_and_sort(&all, &filter, None, None).len(), all.len());
    }

    #[test]
    fn test_type_set_deferred_until_loaded() {
        let all = records();
        let filter = FilterState {
            type_key: KeyFilter::only("electric"),
            ..FilterState::default()
        };
        assert_eq!(filter_and_sort(&all, &filter, None, None).len(), all.len());

        let electric: NameSet = ["pikachu", "electabuzz"].map(String::from).into();
        let result = filter_and_sort(&all, &filter, Some(&electric), None);
        assert_eq!(names(&result), vec!["pikachu", "electabuzz"]);
    }

    #[test]
    fn test_loaded_set_ignored_when_dimension_inactive() {
        let all = records();
        let electric: NameSet = ["pikachu"].map(String::from).into();
        let result = filter_and_sort(&all, &FilterState::default(), Some(&electric), None);
        assert_eq!(result.len(), all.len());
    }

    #[test]
    fn test_empty_loaded_set_excludes_everything() {
        let all = records();
        let filter = FilterState {
            habitat: KeyFilter::only("sea"),
            ..FilterState::default()
        };
        let empty = NameSet::new();
        assert!(filter_and_sort(&all, &filter, None, Some(&empty)).is_empty());
    }

    #[test]
    fn test_legendary_allowlist() {
        let all = records();
        let filter = FilterState {
            legendary_only: true,
            ..FilterState::default()
        };
        let result = filter_and_sort(&all, &filter, None, None);
        assert_eq!(names(&result), vec!["mewtwo", "mew", "ho-oh"]);
    }

    #[test]
    fn test_filters_combine_as_conjunction() {
        let all = records();
        let filter = FilterState {
            region: KeyFilter::only("kanto"),
            legendary_only: true,
            search_query: "mew".to_string(),
            ..FilterState::default()
        };
        let result = filter_and_sort(&all, &filter, None, None);
        assert_eq!(names(&result), vec!["mewtwo", "mew"]);
    }

    #[test]
    fn test_sort_by_name() {
        let all = records();
        let filter = FilterState {
            sort_order: SortOrder::Name,
            ..FilterState::default()
        };
        let result = filter_and_sort(&all, &filter, None, None);
        assert_eq!(
            names(&result),
            vec!["bulbasaur", "chikorita", "electabuzz", "ho-oh", "mew", "mewtwo", "pikachu"]
        );
    }

    #[test]
    fn test_compare_names_ignores_case() {
        assert_eq!(compare_names("Abra", "abra"), Ordering::Less);
        assert_eq!(compare_names("abra", "Bulbasaur"), Ordering::Less);
        assert_eq!(compare_names("mew", "mew"), Ordering::Equal);
        assert_eq!(compare_names("mr-mime", "mrs"), Ordering::Less);
    }
}
