use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use dex_app::{FilterMessage, Runtime, SelectionMessage};
use dex_client::{CatalogService, CatalogSource, ClientSettings, PokeApiClient};
use dex_model::{RecordRef, SortOrder};

use crate::cli::{FilterArgs, ListArgs, ShowArgs};
use crate::report::{ListReport, ShowReport};

/// Resolves client settings: an explicit file must load, otherwise the
/// platform settings file or defaults. `base_url` wins over either.
pub fn client_settings(config: Option<&Path>, base_url: Option<&str>) -> Result<ClientSettings> {
    let settings = match config {
        Some(path) => ClientSettings::try_load_from(path)
            .with_context(|| format!("load settings from {}", path.display()))?,
        None => ClientSettings::load(),
    };
    Ok(match base_url {
        Some(url) => settings.with_base_url(url),
        None => settings,
    })
}

pub fn build_service(settings: &ClientSettings) -> Result<CatalogService<PokeApiClient>> {
    let client = PokeApiClient::new(settings).context("create data service client")?;
    debug!(base_url = client.base_url(), "Using data service");
    Ok(CatalogService::new(client).with_list_limit(settings.list_limit))
}

/// The filter messages equivalent to the command-line filters.
pub fn filter_messages(filters: &FilterArgs) -> Vec<FilterMessage> {
    let mut messages = Vec::new();
    if let Some(query) = &filters.search {
        messages.push(FilterMessage::SearchChanged(query.clone()));
    }
    if let Some(region) = &filters.region {
        messages.push(FilterMessage::RegionSelected(region.clone()));
    }
    if let Some(type_key) = &filters.type_key {
        messages.push(FilterMessage::TypeSelected(type_key.clone()));
    }
    if let Some(habitat) = &filters.habitat {
        messages.push(FilterMessage::HabitatSelected(habitat.clone()));
    }
    if filters.legendary {
        messages.push(FilterMessage::LegendaryToggled(true));
    }
    let order = SortOrder::from(filters.sort);
    if order != SortOrder::default() {
        messages.push(FilterMessage::SortOrderSelected(order));
    }
    messages
}

/// Starts the controller, waits for the listing and applies `filters`.
///
/// An empty listing is not an error: the commands carry on with no records.
async fn filtered_runtime<S: CatalogSource + 'static>(
    service: CatalogService<S>,
    filters: &FilterArgs,
) -> Runtime<S> {
    let mut runtime = Runtime::start(service);
    runtime.run_until_idle().await;
    if runtime.state().records.is_empty() {
        warn!("Catalog is empty; continuing without records");
    }

    for message in filter_messages(filters) {
        runtime.dispatch(message);
    }
    runtime.run_until_idle().await;
    runtime
}

pub async fn run_list<S: CatalogSource + 'static>(
    service: CatalogService<S>,
    args: &ListArgs,
) -> Result<ListReport> {
    let mut runtime = filtered_runtime(service, &args.filters).await;
    for _ in 1..args.pages {
        runtime.dispatch(FilterMessage::LoadMore);
    }

    let report = ListReport::from_state(runtime.state());
    info!(
        matches = report.match_count,
        shown = report.records.len(),
        "Listing ready"
    );
    Ok(report)
}

pub async fn run_show<S: CatalogSource + 'static>(
    service: CatalogService<S>,
    args: &ShowArgs,
) -> Result<ShowReport> {
    let record: RecordRef = args.record.parse().context("parse record")?;
    debug!(%record, "Showing record");
    let mut runtime = filtered_runtime(service, &args.filters).await;
    runtime.dispatch(SelectionMessage::Select(record));
    runtime.run_until_idle().await;

    let state = runtime.state();
    if let Some(error) = &state.detail_error {
        bail!("{}: {error}", args.record);
    }
    ShowReport::from_state(state).with_context(|| format!("{}: no record selected", args.record))
}
