//! The controller.

use crate::handler::{CatalogHandler, FilterHandler, MessageHandler, SelectionHandler};
use crate::message::{CatalogMessage, Message};
use crate::state::AppState;
use crate::task::Task;

/// Elm-style controller: state plus a pure `update`.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new controller.
    ///
    /// Returns the initial state together with the startup fetch.
    pub fn new() -> (Self, Task) {
        let mut app = Self::default();
        let startup = app.update(Message::Catalog(CatalogMessage::Start));
        (app, startup)
    }

    /// Update state in response to a message.
    ///
    /// All state changes happen here. The returned task lists the fetches
    /// the runtime must start.
    pub fn update(&mut self, message: Message) -> Task {
        match message {
            Message::Catalog(msg) => CatalogHandler.handle(&mut self.state, msg),
            Message::Filter(msg) => FilterHandler.handle(&mut self.state, msg),
            Message::Selection(msg) => SelectionHandler.handle(&mut self.state, msg),
        }
    }
}
