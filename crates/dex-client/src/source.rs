//! The data-access contract.

use std::future::Future;

use dex_model::{EvolutionStage, RecordDetail, RecordRef, RecordSummary};

use crate::error::Result;

/// Species resource reduced to what lineage resolution needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesResource {
    /// Species name, matched exactly against evolution chain stages.
    pub name: String,
    /// Evolution chain locator.
    pub evolution_chain_url: String,
}

/// Read-only access to the catalog data service.
///
/// [`crate::PokeApiClient`] implements this over HTTP. Tests substitute
/// in-memory sources.
pub trait CatalogSource {
    /// One page of the record listing. Ids come from each entry's locator.
    fn list_records(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<RecordSummary>>>;

    /// Full record for an id or (case-insensitive) name.
    fn record_detail(&self, record: &RecordRef) -> impl Future<Output = Result<RecordDetail>>;

    /// Names of every record with the given type.
    fn names_by_type(&self, key: &str) -> impl Future<Output = Result<Vec<String>>>;

    /// Names of every species living in the given habitat.
    fn names_by_habitat(&self, key: &str) -> impl Future<Output = Result<Vec<String>>>;

    /// Species resource at `url`.
    fn species(&self, url: &str) -> impl Future<Output = Result<SpeciesResource>>;

    /// Evolution chain at `url`.
    fn evolution_chain(&self, url: &str) -> impl Future<Output = Result<EvolutionStage>>;
}
