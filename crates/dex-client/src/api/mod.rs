//! Data service API.

pub mod client;
pub mod types;

pub use client::PokeApiClient;
