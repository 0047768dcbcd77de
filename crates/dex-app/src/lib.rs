//! Application state controller for the Dexview catalog viewer.
//!
//! The architecture follows the Elm pattern: State → Message → Update.
//!
//! - [`AppState`] holds everything that changes
//! - [`Message`] covers user actions and fetch completions
//! - [`App::update`] mutates state and returns a [`Task`] of fetches to start
//! - [`Runtime`] executes those fetches concurrently and feeds completions
//!   back into `update`
//!
//! Fetches overlap freely. A completion that no longer answers the current
//! state (a name set for a key the user moved away from, a detail for a
//! superseded request, lineage for a deselected record) is discarded.

pub mod app;
pub mod handler;
pub mod message;
pub mod runtime;
pub mod state;
pub mod task;

pub use app::App;
pub use message::{CatalogMessage, FilterMessage, Message, SelectionMessage};
pub use runtime::Runtime;
pub use state::{AppState, LoadingFlags};
pub use task::{Command, Task};
