//! Message handlers, one per message group.
//!
//! [`crate::App::update`] dispatches each message group to its handler:
//!
//! ```ignore
//! match message {
//!     Message::Catalog(msg) => CatalogHandler.handle(&mut self.state, msg),
//!     Message::Filter(msg) => FilterHandler.handle(&mut self.state, msg),
//!     Message::Selection(msg) => SelectionHandler.handle(&mut self.state, msg),
//! }
//! ```

mod catalog;
mod filter;
mod selection;

use crate::state::AppState;
use crate::task::Task;

pub use catalog::CatalogHandler;
pub use filter::FilterHandler;
pub use selection::SelectionHandler;

/// Handles one message group.
pub trait MessageHandler<M> {
    /// Mutates `state` for `msg` and returns the fetches to start.
    fn handle(&self, state: &mut AppState, msg: M) -> Task;
}
