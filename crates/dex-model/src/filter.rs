//! Filter, sort and pagination state.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Page size a new query starts from.
pub const BASE_PAGE_SIZE: usize = 24;

/// Amount "load more" adds to the page size.
pub const PAGE_INCREMENT: usize = 24;

/// Canonical names belonging to one value of a filter dimension.
pub type NameSet = HashSet<String>;

/// Selection for one keyed filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum KeyFilter {
    /// No constraint.
    #[default]
    All,
    /// Constrain to one key.
    Only(String),
}

impl KeyFilter {
    /// Literal used for the unconstrained selection.
    pub const ALL_KEY: &'static str = "all";

    /// Constrain to `key`. The literal `"all"` yields [`KeyFilter::All`].
    pub fn only(key: impl Into<String>) -> Self {
        let key = key.into();
        if key == Self::ALL_KEY {
            Self::All
        } else {
            Self::Only(key)
        }
    }

    /// Whether this dimension is unconstrained.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(key) => Some(key),
        }
    }
}

impl From<String> for KeyFilter {
    fn from(value: String) -> Self {
        Self::only(value)
    }
}

impl From<KeyFilter> for String {
    fn from(value: KeyFilter) -> Self {
        value.to_string()
    }
}

impl FromStr for KeyFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::only(s.trim()))
    }
}

impl fmt::Display for KeyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().unwrap_or(Self::ALL_KEY))
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending numeric id.
    #[default]
    Id,
    /// Ascending name.
    Name,
}

impl SortOrder {
    /// Get a human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            other => Err(ModelError::UnknownSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Id => "id",
            Self::Name => "name",
        })
    }
}

/// Everything the user controls about the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search (name substring or exact id).
    pub search_query: String,
    /// Region key.
    pub region: KeyFilter,
    /// Type key.
    pub type_key: KeyFilter,
    /// Habitat key.
    pub habitat: KeyFilter,
    /// Only show allowlisted legendary ids.
    pub legendary_only: bool,
    /// Result ordering.
    pub sort_order: SortOrder,
    /// Number of results currently shown.
    pub page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            region: KeyFilter::All,
            type_key: KeyFilter::All,
            habitat: KeyFilter::All,
            legendary_only: false,
            sort_order: SortOrder::Id,
            page_size: BASE_PAGE_SIZE,
        }
    }
}

impl FilterState {
    /// Replaces the search text.
    ///
    /// A new query starts from the first page, so the page size is reset
    /// whenever the text actually changes. Returns whether it changed.
    pub fn set_search(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.search_query {
            return false;
        }
        self.search_query = query;
        self.page_size = BASE_PAGE_SIZE;
        true
    }

    /// Grows the page by one increment.
    pub fn load_more(&mut self) {
        self.page_size = self.page_size.saturating_add(PAGE_INCREMENT);
    }

    /// Resets region, type, habitat, legendary and search.
    ///
    /// Sort order is kept. Page size only resets if the search text changed.
    pub fn clear(&mut self) {
        self.region = KeyFilter::All;
        self.type_key = KeyFilter::All;
        self.habitat = KeyFilter::All;
        self.legendary_only = false;
        self.set_search(String::new());
    }

    /// Whether any predicate is active.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.search_query.trim().is_empty()
            || !self.region.is_all()
            || !self.type_key.is_all()
            || !self.habitat.is_all()
            || self.legendary_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_filter_parsing() {
        assert_eq!("all".parse::<KeyFilter>().unwrap(), KeyFilter::All);
        assert_eq!(
            "fire".parse::<KeyFilter>().unwrap(),
            KeyFilter::Only("fire".to_string())
        );
        assert_eq!(KeyFilter::only("all"), KeyFilter::All);
        assert_eq!(KeyFilter::All.to_string(), "all");
    }

    #[test]
    fn test_key_filter_serde_uses_plain_strings() {
        let json = serde_json::to_string(&KeyFilter::only("sea")).unwrap();
        assert_eq!(json, "\"sea\"");
        let parsed: KeyFilter = serde_json::from_str("\"all\"").unwrap();
        assert!(parsed.is_all());
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("Name".parse::<SortOrder>().unwrap(), SortOrder::Name);
        assert_eq!(
            "weight".parse::<SortOrder>(),
            Err(ModelError::UnknownSortOrder("weight".to_string()))
        );
    }

    #[test]
    fn test_search_change_resets_page_size() {
        let mut filter = FilterState::default();
        filter.load_more();
        filter.load_more();
        assert_eq!(filter.page_size, 72);

        assert!(filter.set_search("pika"));
        assert_eq!(filter.page_size, BASE_PAGE_SIZE);
    }

    #[test]
    fn test_same_search_keeps_page_size() {
        let mut filter = FilterState::default();
        filter.set_search("pika");
        filter.load_more();
        assert!(!filter.set_search("pika"));
        assert_eq!(filter.page_size, 48);
    }

    #[test]
    fn test_other_filters_keep_page_size() {
        let mut filter = FilterState::default();
        filter.load_more();
        filter.region = KeyFilter::only("kanto");
        filter.legendary_only = true;
        assert_eq!(filter.page_size, 48);
    }

    #[test]
    fn test_clear_keeps_sort_order() {
        let mut filter = FilterState {
            search_query: "mew".to_string(),
            region: KeyFilter::only("kanto"),
            type_key: KeyFilter::only("psychic"),
            habitat: KeyFilter::only("rare"),
            legendary_only: true,
            sort_order: SortOrder::Name,
            page_size: 96,
        };
        filter.clear();
        assert!(!filter.is_filtering());
        assert_eq!(filter.sort_order, SortOrder::Name);
        assert_eq!(filter.page_size, BASE_PAGE_SIZE);
    }
}
