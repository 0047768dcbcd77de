//! Controller behaviour against an in-memory data source.

use std::collections::HashMap;

use dex_app::{
    App, CatalogMessage, Command, FilterMessage, Message, Runtime, SelectionMessage,
};
use dex_client::{CatalogService, CatalogSource, ClientError, Result, SpeciesResource};
use dex_model::{
    EvolutionStage, KeyFilter, NameSet, RecordDetail, RecordRef, RecordSummary, SortOrder,
};

#[derive(Default)]
struct FakeSource {
    records: Vec<RecordSummary>,
    types: HashMap<String, Vec<String>>,
    habitats: HashMap<String, Vec<String>>,
    chains: HashMap<String, EvolutionStage>,
}

impl FakeSource {
    fn starter_catalog() -> Self {
        let names = [
            (1, "bulbasaur"),
            (2, "ivysaur"),
            (3, "venusaur"),
            (4, "charmander"),
            (7, "squirtle"),
            (150, "mewtwo"),
        ];
        let mut source = Self {
            records: names
                .iter()
                .map(|(id, name)| RecordSummary::new(*id, *name))
                .collect(),
            ..Self::default()
        };
        source
            .types
            .insert("fire".to_string(), vec!["charmander".to_string()]);
        source.types.insert(
            "grass".to_string(),
            vec![
                "bulbasaur".to_string(),
                "ivysaur".to_string(),
                "venusaur".to_string(),
            ],
        );
        source.chains.insert(
            "chain/1".to_string(),
            EvolutionStage::leaf("bulbasaur", 1).with_child(
                EvolutionStage::leaf("ivysaur", 2).with_child(EvolutionStage::leaf("venusaur", 3)),
            ),
        );
        source
    }

    fn detail_for(record: &RecordSummary) -> RecordDetail {
        RecordDetail {
            id: record.id,
            name: record.name.clone(),
            types: Vec::new(),
            stats: Default::default(),
            height: 7,
            weight: 69,
            abilities: Vec::new(),
            species_url: Some(format!("species/{}", record.name)),
            sprites: Default::default(),
        }
    }
}

impl CatalogSource for FakeSource {
    async fn list_records(&self, limit: u32, offset: u32) -> Result<Vec<RecordSummary>> {
        Ok(self
            .records
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn record_detail(&self, record: &RecordRef) -> Result<RecordDetail> {
        self.records
            .iter()
            .find(|summary| match record {
                RecordRef::Id(id) => summary.id == *id,
                RecordRef::Name(name) => summary.name == *name,
            })
            .map(Self::detail_for)
            .ok_or_else(|| ClientError::NotFound(record.to_string()))
    }

    async fn names_by_type(&self, key: &str) -> Result<Vec<String>> {
        self.types
            .get(key)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(key.to_string()))
    }

    async fn names_by_habitat(&self, key: &str) -> Result<Vec<String>> {
        self.habitats
            .get(key)
            .cloned()
            .ok_or_else(|| ClientError::Network("habitat service down".to_string()))
    }

    async fn species(&self, url: &str) -> Result<SpeciesResource> {
        let name = url.trim_start_matches("species/");
        if ["bulbasaur", "ivysaur", "venusaur"].contains(&name) {
            Ok(SpeciesResource {
                name: name.to_string(),
                evolution_chain_url: "chain/1".to_string(),
            })
        } else {
            Err(ClientError::MalformedResponse(format!("no chain for {name}")))
        }
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionStage> {
        self.chains
            .get(url)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(url.to_string()))
    }
}

async fn started() -> Runtime<FakeSource> {
    let mut runtime = Runtime::start(CatalogService::new(FakeSource::starter_catalog()));
    assert!(runtime.state().loading.initializing);
    runtime.run_until_idle().await;
    runtime
}

fn names(runtime: &Runtime<FakeSource>) -> Vec<String> {
    runtime
        .state()
        .visible()
        .items
        .iter()
        .map(|record| record.name.clone())
        .collect()
}

fn ids(runtime: &Runtime<FakeSource>) -> Vec<u32> {
    runtime
        .state()
        .visible()
        .items
        .iter()
        .map(|record| record.id)
        .collect()
}

#[tokio::test]
async fn startup_loads_catalog() {
    let runtime = started().await;
    assert!(!runtime.state().loading.initializing);
    assert!(!runtime.state().is_busy());
    assert_eq!(runtime.state().match_count(), 6);
    assert_eq!(runtime.pending(), 0);
}

#[tokio::test]
async fn type_filter_narrows_once_names_arrive() {
    let mut runtime = started().await;

    runtime.dispatch(FilterMessage::TypeSelected(KeyFilter::only("grass")));
    assert!(runtime.state().is_loading_filter_data());
    assert_eq!(runtime.state().match_count(), 6);

    runtime.run_until_idle().await;
    assert!(!runtime.state().is_loading_filter_data());
    assert_eq!(ids(&runtime), [1, 2, 3]);

    runtime.dispatch(FilterMessage::SortOrderSelected(SortOrder::Name));
    assert_eq!(names(&runtime), ["bulbasaur", "ivysaur", "venusaur"]);
}

#[tokio::test]
async fn failed_name_set_narrows_to_nothing() {
    let mut runtime = started().await;
    runtime.dispatch(FilterMessage::HabitatSelected(KeyFilter::only("cave")));
    runtime.run_until_idle().await;

    assert_eq!(runtime.state().habitat_set, Some(NameSet::new()));
    assert_eq!(runtime.state().match_count(), 0);
}

#[test]
fn stale_type_names_are_discarded() {
    let (mut app, _) = App::new();
    let _ = app.update(FilterMessage::TypeSelected(KeyFilter::only("fire")).into());
    let _ = app.update(FilterMessage::TypeSelected(KeyFilter::only("water")).into());

    let _ = app.update(Message::Catalog(CatalogMessage::TypeNamesLoaded {
        key: "fire".to_string(),
        names: NameSet::from(["charmander".to_string()]),
    }));
    assert!(app.state.type_set.is_none());
    assert!(app.state.loading.type_names);

    let _ = app.update(Message::Catalog(CatalogMessage::TypeNamesLoaded {
        key: "water".to_string(),
        names: NameSet::from(["squirtle".to_string()]),
    }));
    assert_eq!(
        app.state.type_set,
        Some(NameSet::from(["squirtle".to_string()]))
    );
    assert!(!app.state.loading.type_names);
}

#[test]
fn superseded_detail_is_discarded() {
    let (mut app, _) = App::new();
    let first = app.update(SelectionMessage::Select(RecordRef::Id(1)).into());
    let second = app.update(SelectionMessage::Select(RecordRef::Id(4)).into());

    let request_of = |task: &dex_app::Task| match task.commands() {
        [Command::FetchDetail { request, .. }] => *request,
        other => panic!("unexpected commands {other:?}"),
    };
    let (first, second) = (request_of(&first), request_of(&second));

    let late = FakeSource::detail_for(&RecordSummary::new(1, "bulbasaur"));
    let task = app.update(Message::Catalog(CatalogMessage::DetailLoaded {
        request: first,
        result: Ok(late),
    }));
    assert!(task.is_none());
    assert!(app.state.selected.is_none());
    assert!(app.state.loading.detail);

    let current = FakeSource::detail_for(&RecordSummary::new(4, "charmander"));
    let task = app.update(Message::Catalog(CatalogMessage::DetailLoaded {
        request: second,
        result: Ok(current.clone()),
    }));
    assert_eq!(task.commands(), [Command::FetchLineage(current)]);
    assert_eq!(app.state.selected.as_ref().map(|d| d.id), Some(4));
    assert!(!app.state.loading.detail);
}

#[test]
fn lineage_for_deselected_record_is_discarded() {
    let (mut app, _) = App::new();
    app.state.selected = Some(FakeSource::detail_for(&RecordSummary::new(4, "charmander")));
    app.state.loading.lineage = true;

    let split = dex_model::EvolutionSplit {
        ancestors: vec![EvolutionStage::leaf("bulbasaur", 1).node()],
        descendants: Vec::new(),
    };
    let _ = app.update(Message::Catalog(CatalogMessage::LineageLoaded {
        record_id: 2,
        split,
    }));

    assert!(app.state.lineage.is_empty());
    assert!(app.state.loading.lineage);
}

#[tokio::test]
async fn selecting_by_name_loads_detail_and_lineage() {
    let mut runtime = started().await;
    runtime.dispatch(SelectionMessage::Select(RecordRef::name("Ivysaur")));
    assert!(runtime.state().is_busy());
    runtime.run_until_idle().await;

    let state = runtime.state();
    assert!(state.detail_open);
    assert_eq!(state.selected.as_ref().map(|d| d.id), Some(2));
    assert!(!state.loading.lineage);
    let ancestors: Vec<_> = state.lineage.ancestors.iter().map(|n| n.id).collect();
    let descendants: Vec<_> = state.lineage.descendants.iter().map(|n| n.id).collect();
    assert_eq!(ancestors, [1]);
    assert_eq!(descendants, [3]);
}

#[tokio::test]
async fn failed_detail_keeps_selection() {
    let mut runtime = started().await;
    runtime.dispatch(SelectionMessage::Select(RecordRef::Id(7)));
    runtime.run_until_idle().await;

    runtime.dispatch(SelectionMessage::Select(RecordRef::Id(9999)));
    runtime.run_until_idle().await;

    let state = runtime.state();
    assert_eq!(state.selected.as_ref().map(|d| d.id), Some(7));
    assert_eq!(state.detail_error.as_deref(), Some("Pokemon not found"));
    assert!(!state.loading.detail);
    assert!(state.lineage.is_empty());
}

#[tokio::test]
async fn new_request_clears_previous_failure() {
    let mut runtime = started().await;
    runtime.dispatch(SelectionMessage::Select(RecordRef::Id(9999)));
    runtime.run_until_idle().await;
    assert!(runtime.state().detail_error.is_some());

    runtime.dispatch(SelectionMessage::Select(RecordRef::Id(4)));
    assert_eq!(runtime.state().detail_error, None);
    assert!(runtime.state().loading.detail);

    runtime.run_until_idle().await;
    assert_eq!(runtime.state().selected.as_ref().map(|d| d.id), Some(4));
}

#[tokio::test]
async fn next_and_previous_walk_the_filtered_list() {
    let mut runtime = started().await;
    runtime.dispatch(FilterMessage::TypeSelected(KeyFilter::only("grass")));
    runtime.dispatch(SelectionMessage::Select(RecordRef::Id(2)));
    runtime.run_until_idle().await;

    assert!(runtime.state().can_next());
    runtime.dispatch(SelectionMessage::Next);
    runtime.run_until_idle().await;
    assert_eq!(runtime.state().current_index(), Some(2));
    assert!(!runtime.state().can_next());

    runtime.dispatch(SelectionMessage::Next);
    assert_eq!(runtime.pending(), 0);

    runtime.dispatch(SelectionMessage::Previous);
    runtime.dispatch(SelectionMessage::Previous);
    runtime.run_until_idle().await;
    assert_eq!(runtime.state().selected.as_ref().map(|d| d.id), Some(2));
}

#[tokio::test]
async fn back_and_clear_filters() {
    let mut runtime = started().await;
    runtime.dispatch(FilterMessage::SearchChanged("saur".to_string()));
    runtime.dispatch(FilterMessage::LegendaryToggled(true));
    assert_eq!(runtime.state().match_count(), 0);

    runtime.dispatch(FilterMessage::ClearFilters);
    assert_eq!(runtime.state().match_count(), 6);

    runtime.dispatch(SelectionMessage::Select(RecordRef::Id(150)));
    runtime.run_until_idle().await;
    assert!(runtime.state().detail_open);

    runtime.dispatch(SelectionMessage::Back);
    assert!(!runtime.state().detail_open);
    assert!(runtime.state().selected.is_none());
    assert!(runtime.state().lineage.is_empty());
}
