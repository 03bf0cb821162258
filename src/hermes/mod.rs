//! Hermes API client module
//!
//! Talks to a Pyth Hermes endpoint for two things: the full price-feed
//! catalog at startup, and latest-price updates per request.

mod client;
mod types;

pub use client::{CatalogError, FetchError, HermesClient, HermesConfig};
pub use types::RawPricePoint;
