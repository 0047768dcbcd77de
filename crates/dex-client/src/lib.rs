//! Data access for the Dexview catalog viewer.
//!
//! This crate talks to a read-only, PokeAPI-compatible REST service:
//!
//! - [`CatalogSource`] - the request/response contract, one method per
//!   service call
//! - [`PokeApiClient`] - the HTTP implementation (`reqwest` + `serde_json`)
//! - [`CatalogService`] - the boundary that turns every failure into an
//!   empty or coarse result so nothing downstream handles transport errors
//! - [`ClientSettings`] - base URL, timeout and listing limit, loadable
//!   from a TOML settings file
//!
//! # Example
//!
//! ```no_run
//! use dex_client::{CatalogService, ClientSettings, PokeApiClient};
//!
//! async fn count_records() -> dex_client::Result<usize> {
//!     let settings = ClientSettings::load();
//!     let service = CatalogService::new(PokeApiClient::new(&settings)?)
//!         .with_list_limit(settings.list_limit);
//!     Ok(service.all_records().await.len())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod source;

pub use api::PokeApiClient;
pub use config::ClientSettings;
pub use error::{ClientError, Result};
pub use service::CatalogService;
pub use source::{CatalogSource, SpeciesResource};
