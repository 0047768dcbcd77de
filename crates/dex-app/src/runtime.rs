//! Effect runtime.
//!
//! Executes the commands returned by [`App::update`] against a
//! [`CatalogService`] and feeds each completion back as a message. All
//! fetches run concurrently on the caller's thread; completions are applied
//! one at a time in arrival order.

use std::rc::Rc;

use futures_util::FutureExt;
use futures_util::StreamExt;
use futures_util::future::LocalBoxFuture;
use futures_util::stream::FuturesUnordered;

use dex_client::{CatalogService, CatalogSource};

use crate::app::App;
use crate::message::{CatalogMessage, Message};
use crate::state::AppState;
use crate::task::{Command, Task};

/// Drives an [`App`] against a data source.
pub struct Runtime<S> {
    app: App,
    service: Rc<CatalogService<S>>,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Message>>,
}

impl<S: CatalogSource + 'static> Runtime<S> {
    /// Creates the controller and starts loading the catalog.
    pub fn start(service: CatalogService<S>) -> Self {
        let (app, startup) = App::new();
        let mut runtime = Self {
            app,
            service: Rc::new(service),
            in_flight: FuturesUnordered::new(),
        };
        runtime.spawn(startup);
        runtime
    }

    /// Current controller state.
    pub fn state(&self) -> &AppState {
        &self.app.state
    }

    /// Number of fetches still running.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Applies a message and starts whatever it asks for.
    pub fn dispatch(&mut self, message: impl Into<Message>) {
        let task = self.app.update(message.into());
        self.spawn(task);
    }

    /// Waits for the next completion and applies it.
    ///
    /// Returns `false` once nothing is in flight.
    pub async fn step(&mut self) -> bool {
        match self.in_flight.next().await {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    /// Applies completions until nothing is in flight.
    pub async fn run_until_idle(&mut self) {
        while self.step().await {}
    }

    fn spawn(&mut self, task: Task) {
        for command in task {
            tracing::trace!(?command, "Starting fetch");
            let future = self.execute(command);
            self.in_flight.push(future);
        }
    }

    fn execute(&self, command: Command) -> LocalBoxFuture<'static, Message> {
        let service = Rc::clone(&self.service);
        match command {
            Command::FetchRecords => async move {
                Message::Catalog(CatalogMessage::RecordsLoaded(service.all_records().await))
            }
            .boxed_local(),

            Command::FetchTypeNames(key) => async move {
                let names = service.type_names(&key).await;
                Message::Catalog(CatalogMessage::TypeNamesLoaded { key, names })
            }
            .boxed_local(),

            Command::FetchHabitatNames(key) => async move {
                let names = service.habitat_names(&key).await;
                Message::Catalog(CatalogMessage::HabitatNamesLoaded { key, names })
            }
            .boxed_local(),

            Command::FetchDetail { request, record } => async move {
                let result = service.detail(&record).await;
                Message::Catalog(CatalogMessage::DetailLoaded { request, result })
            }
            .boxed_local(),

            Command::FetchLineage(detail) => async move {
                let split = service.lineage(&detail).await;
                Message::Catalog(CatalogMessage::LineageLoaded {
                    record_id: detail.id,
                    split,
                })
            }
            .boxed_local(),
        }
    }
}
