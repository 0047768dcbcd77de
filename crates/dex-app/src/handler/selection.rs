//! Detail view selection and navigation.

use dex_model::{EvolutionSplit, RecordRef};

use super::MessageHandler;
use crate::message::SelectionMessage;
use crate::state::AppState;
use crate::task::{Command, Task};

/// Handler for [`SelectionMessage`].
pub struct SelectionHandler;

impl MessageHandler<SelectionMessage> for SelectionHandler {
    fn handle(&self, state: &mut AppState, msg: SelectionMessage) -> Task {
        match msg {
            SelectionMessage::Select(record) => request_detail(state, record),

            SelectionMessage::Next => match state.next_record() {
                Some(next) => {
                    let record = RecordRef::Id(next.id);
                    request_detail(state, record)
                }
                None => Task::none(),
            },

            SelectionMessage::Previous => match state.previous_record() {
                Some(previous) => {
                    let record = RecordRef::Id(previous.id);
                    request_detail(state, record)
                }
                None => Task::none(),
            },

            SelectionMessage::Back => {
                state.detail_open = false;
                state.selected = None;
                state.lineage = EvolutionSplit::default();
                state.detail_error = None;
                state.pending_detail = None;
                state.loading.detail = false;
                state.loading.lineage = false;
                Task::none()
            }
        }
    }
}

/// Starts a detail fetch that supersedes any request still in flight.
fn request_detail(state: &mut AppState, record: RecordRef) -> Task {
    let request = state.begin_detail_request();
    tracing::debug!(request, %record, "Requesting detail");
    Task::perform(Command::FetchDetail { request, record })
}
