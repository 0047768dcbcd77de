//! HTTP client for the PokeAPI-compatible data service.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use dex_model::{EvolutionStage, RecordDetail, RecordRef, RecordSummary};

use super::types::{
    EvolutionChainResponse, HabitatResponse, PokemonResponse, ResourceList, SpeciesResponse,
    TypeResponse,
};
use crate::config::ClientSettings;
use crate::error::{ClientError, Result};
use crate::source::{CatalogSource, SpeciesResource};

/// Client for the read-only data service.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client from `settings`.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&settings.user_agent)
                .map_err(|e| ClientError::InvalidConfig(format!("invalid user agent: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Service root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetches `url` and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Network(format!(
                "data service error ({status}): {body}"
            )));
        }

        // Decode separately so shape errors are reported as malformed, not network.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl CatalogSource for PokeApiClient {
    async fn list_records(&self, limit: u32, offset: u32) -> Result<Vec<RecordSummary>> {
        let url = self.endpoint(&format!("pokemon?limit={limit}&offset={offset}"));
        let list: ResourceList = self.get_json(&url).await?;

        let total = list.results.len();
        let records: Vec<RecordSummary> = list
            .results
            .iter()
            .filter_map(|entry| entry.to_summary())
            .collect();
        if records.len() < total {
            tracing::warn!(
                "Skipped {} listing entries without a numeric id",
                total - records.len()
            );
        }
        tracing::debug!(count = list.count, fetched = records.len(), "Listed records");

        Ok(records)
    }

    async fn record_detail(&self, record: &RecordRef) -> Result<RecordDetail> {
        let url = self.endpoint(&format!("pokemon/{record}"));
        let response: PokemonResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    async fn names_by_type(&self, key: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&format!("type/{key}"));
        let response: TypeResponse = self.get_json(&url).await?;
        Ok(response.names())
    }

    async fn names_by_habitat(&self, key: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&format!("pokemon-habitat/{key}"));
        let response: HabitatResponse = self.get_json(&url).await?;
        Ok(response.names())
    }

    async fn species(&self, url: &str) -> Result<SpeciesResource> {
        let response: SpeciesResponse = self.get_json(url).await?;
        let evolution_chain_url = response
            .evolution_chain
            .map(|chain| chain.url)
            .ok_or_else(|| {
                ClientError::MalformedResponse(format!(
                    "species {} has no evolution chain",
                    response.name
                ))
            })?;
        Ok(SpeciesResource {
            name: response.name,
            evolution_chain_url,
        })
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionStage> {
        let response: EvolutionChainResponse = self.get_json(url).await?;
        Ok(response.chain.into())
    }
}
