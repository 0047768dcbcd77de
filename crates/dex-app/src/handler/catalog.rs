//! Startup and fetch completion handler.
//!
//! Completions can arrive in any order. Each one is applied only if it still
//! answers the current state: name sets by key, details by request identity,
//! lineage by record id. Anything else is dropped.

use dex_model::EvolutionSplit;

use super::MessageHandler;
use crate::message::CatalogMessage;
use crate::state::AppState;
use crate::task::{Command, Task};

/// Handler for [`CatalogMessage`].
pub struct CatalogHandler;

impl MessageHandler<CatalogMessage> for CatalogHandler {
    fn handle(&self, state: &mut AppState, msg: CatalogMessage) -> Task {
        match msg {
            CatalogMessage::Start => {
                state.loading.initializing = true;
                Task::perform(Command::FetchRecords)
            }

            CatalogMessage::RecordsLoaded(records) => {
                tracing::info!("Catalog ready with {} records", records.len());
                state.records = records;
                state.loading.initializing = false;
                Task::none()
            }

            CatalogMessage::TypeNamesLoaded { key, names } => {
                if state.filter.type_key.key() == Some(key.as_str()) {
                    state.type_set = Some(names);
                    state.loading.type_names = false;
                } else {
                    tracing::debug!(key, "Discarding stale type names");
                }
                Task::none()
            }

            CatalogMessage::HabitatNamesLoaded { key, names } => {
                if state.filter.habitat.key() == Some(key.as_str()) {
                    state.habitat_set = Some(names);
                    state.loading.habitat_names = false;
                } else {
                    tracing::debug!(key, "Discarding stale habitat names");
                }
                Task::none()
            }

            CatalogMessage::DetailLoaded { request, result } => {
                if state.pending_detail != Some(request) {
                    tracing::debug!(request, "Discarding superseded detail");
                    return Task::none();
                }
                state.pending_detail = None;
                state.loading.detail = false;

                match result {
                    Ok(detail) => {
                        state.detail_open = true;
                        state.detail_error = None;
                        state.lineage = EvolutionSplit::default();
                        state.loading.lineage = true;
                        state.selected = Some(detail.clone());
                        Task::perform(Command::FetchLineage(detail))
                    }
                    Err(message) => {
                        state.detail_error = Some(message);
                        Task::none()
                    }
                }
            }

            CatalogMessage::LineageLoaded { record_id, split } => {
                if state.selected.as_ref().map(|detail| detail.id) == Some(record_id) {
                    state.lineage = split;
                    state.loading.lineage = false;
                } else {
                    tracing::debug!(record_id, "Discarding lineage for deselected record");
                }
                Task::none()
            }
        }
    }
}
