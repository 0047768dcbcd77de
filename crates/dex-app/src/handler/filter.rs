//! Filter panel handler.

use super::MessageHandler;
use crate::message::FilterMessage;
use crate::state::AppState;
use crate::task::{Command, Task};

/// Handler for [`FilterMessage`].
pub struct FilterHandler;

impl MessageHandler<FilterMessage> for FilterHandler {
    fn handle(&self, state: &mut AppState, msg: FilterMessage) -> Task {
        match msg {
            FilterMessage::SearchChanged(query) => {
                state.filter.set_search(query);
                Task::none()
            }

            FilterMessage::RegionSelected(region) => {
                state.filter.region = region;
                Task::none()
            }

            FilterMessage::TypeSelected(key) => {
                if key == state.filter.type_key {
                    return Task::none();
                }
                state.filter.type_key = key;
                state.type_set = None;
                match state.filter.type_key.key() {
                    Some(key) => {
                        state.loading.type_names = true;
                        Task::perform(Command::FetchTypeNames(key.to_string()))
                    }
                    None => {
                        state.loading.type_names = false;
                        Task::none()
                    }
                }
            }

            FilterMessage::HabitatSelected(key) => {
                if key == state.filter.habitat {
                    return Task::none();
                }
                state.filter.habitat = key;
                state.habitat_set = None;
                match state.filter.habitat.key() {
                    Some(key) => {
                        state.loading.habitat_names = true;
                        Task::perform(Command::FetchHabitatNames(key.to_string()))
                    }
                    None => {
                        state.loading.habitat_names = false;
                        Task::none()
                    }
                }
            }

            FilterMessage::LegendaryToggled(enabled) => {
                state.filter.legendary_only = enabled;
                Task::none()
            }

            FilterMessage::SortOrderSelected(order) => {
                state.filter.sort_order = order;
                Task::none()
            }

            FilterMessage::LoadMore => {
                state.filter.load_more();
                Task::none()
            }

            FilterMessage::ClearFilters => {
                state.filter.clear();
                state.type_set = None;
                state.habitat_set = None;
                state.loading.type_names = false;
                state.loading.habitat_names = false;
                Task::none()
            }
        }
    }
}
