//! Degrading boundary between the data service and the controller.
//!
//! Every failure stops here. Listing and filter-data failures become empty
//! results, lineage failures become "no lineage", and a failed detail fetch
//! becomes a coarse message the controller can show.

use dex_model::{EvolutionSplit, EvolutionStage, NameSet, RecordDetail, RecordRef, RecordSummary};
use dex_query::resolve_lineage;

use crate::config::DEFAULT_LIST_LIMIT;
use crate::source::CatalogSource;

/// Facade over a [`CatalogSource`] that never returns a [`crate::ClientError`].
#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    source: S,
    list_limit: u32,
}

impl<S: CatalogSource> CatalogService<S> {
    /// Wraps `source`, listing up to [`DEFAULT_LIST_LIMIT`] records.
    pub fn new(source: S) -> Self {
        Self {
            source,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Override how many records the bulk listing requests.
    #[must_use]
    pub fn with_list_limit(mut self, list_limit: u32) -> Self {
        self.list_limit = list_limit;
        self
    }

    /// Every record in one call; empty on failure.
    pub async fn all_records(&self) -> Vec<RecordSummary> {
        match self.source.list_records(self.list_limit, 0).await {
            Ok(records) => {
                tracing::info!("Loaded {} records", records.len());
                records
            }
            Err(err) => {
                tracing::warn!("Failed to load record list: {}", err);
                Vec::new()
            }
        }
    }

    /// Names with type `key`; empty on failure.
    pub async fn type_names(&self, key: &str) -> NameSet {
        match self.source.names_by_type(key).await {
            Ok(names) => names.into_iter().collect(),
            Err(err) => {
                tracing::warn!("Failed to load names for type {}: {}", key, err);
                NameSet::new()
            }
        }
    }

    /// Names living in habitat `key`; empty on failure.
    pub async fn habitat_names(&self, key: &str) -> NameSet {
        match self.source.names_by_habitat(key).await {
            Ok(names) => names.into_iter().collect(),
            Err(err) => {
                tracing::warn!("Failed to load names for habitat {}: {}", key, err);
                NameSet::new()
            }
        }
    }

    /// Full record, or the user-facing reason it could not be fetched.
    pub async fn detail(&self, record: &RecordRef) -> Result<RecordDetail, String> {
        self.source.record_detail(record).await.map_err(|err| {
            tracing::warn!("Failed to load detail for {}: {}", record, err);
            err.user_message().to_string()
        })
    }

    /// The evolution tree of `detail`'s species and the species name to look
    /// for in it. `None` when any step of the chain is missing or fails.
    pub async fn evolution_tree(&self, detail: &RecordDetail) -> Option<(String, EvolutionStage)> {
        let Some(species_url) = detail.species_url.as_deref() else {
            tracing::debug!("{} has no species locator", detail.name);
            return None;
        };

        let species = match self.source.species(species_url).await {
            Ok(species) => species,
            Err(err) => {
                tracing::warn!("Failed to load species for {}: {}", detail.name, err);
                return None;
            }
        };

        match self.source.evolution_chain(&species.evolution_chain_url).await {
            Ok(tree) => Some((species.name, tree)),
            Err(err) => {
                tracing::warn!("Failed to load evolution chain for {}: {}", detail.name, err);
                None
            }
        }
    }

    /// Ancestors and descendants of `detail` within its evolution tree.
    ///
    /// Empty when the tree cannot be fetched or does not contain the species.
    pub async fn lineage(&self, detail: &RecordDetail) -> EvolutionSplit {
        match self.evolution_tree(detail).await {
            Some((species, tree)) => resolve_lineage(&tree, &species).into_split(),
            None => EvolutionSplit::default(),
        }
    }
}
