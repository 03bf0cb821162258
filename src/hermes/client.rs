//! HTTP client for the Hermes price API
//!
//! Two endpoints are used: `/v2/price_feeds` for the feed catalog and
//! `/v2/updates/price/latest` for latest-price updates. Failures are mapped
//! to a typed taxonomy so callers can report them distinctly; no retries
//! are performed here.

use super::RawPricePoint;
use crate::catalog::FeedDescriptor;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Public Hermes endpoint
pub const HERMES_URL: &str = "https://hermes.pyth.network";

/// Default request timeout for price fetches
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors loading the feed catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or non-success status from the catalog endpoint
    #[error("price feed catalog unavailable: {0}")]
    Unavailable(String),
    /// A catalog entry lacked required fields
    #[error("malformed price feed catalog: {0}")]
    Parse(String),
}

/// Errors fetching latest prices
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded the timeout budget
    #[error("price request timed out after {0:?}")]
    Timeout(Duration),
    /// Transport-level failure (DNS, refused connection, reset)
    #[error("connection to Hermes failed: {0}")]
    Connection(#[source] reqwest::Error),
    /// Non-2xx response from Hermes
    #[error("Hermes returned HTTP {0}")]
    Http(StatusCode),
    /// Response body was not an object with the expected `parsed` collection
    #[error("malformed price response: {0}")]
    MalformedResponse(String),
}

/// Configuration for the Hermes client
#[derive(Debug, Clone)]
pub struct HermesConfig {
    /// Base URL for the Hermes API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HermesConfig {
    fn default() -> Self {
        Self {
            base_url: HERMES_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the Hermes price API
pub struct HermesClient {
    config: HermesConfig,
    client: Client,
}

impl HermesClient {
    /// Create a client for the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(HermesConfig {
            base_url: base_url.into(),
            ..HermesConfig::default()
        })
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HermesConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch the full set of available price feeds.
    ///
    /// Entries without an `attributes.base` symbol are kept; they are simply
    /// not addressable by ticker.
    pub async fn price_feeds(&self) -> Result<Vec<FeedDescriptor>, CatalogError> {
        let url = format!("{}/v2/price_feeds", self.config.base_url);

        tracing::debug!(url = %url, "Fetching price feed catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "catalog endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        let entries: Vec<FeedEntry> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!(feed_count = entries.len(), "Loaded price feed catalog");

        Ok(entries
            .into_iter()
            .map(|entry| FeedDescriptor {
                id: entry.id,
                base_symbol: entry.attributes.base,
                description: entry.attributes.description,
            })
            .collect())
    }

    /// Fetch the latest price update for each of the given feed ids.
    ///
    /// Callers are expected to short-circuit on an empty id list before
    /// calling; behavior for an empty query is owned by the server.
    pub async fn latest_prices(&self, feed_ids: &[String]) -> Result<Vec<RawPricePoint>, FetchError> {
        let url = format!("{}/v2/updates/price/latest", self.config.base_url);
        let query: Vec<(&str, &str)> = feed_ids.iter().map(|id| ("ids[]", id.as_str())).collect();

        tracing::debug!(url = %url, feed_count = feed_ids.len(), "Fetching latest prices");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let update: LatestPriceResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        update
            .parsed
            .into_iter()
            .map(|parsed| {
                Ok(RawPricePoint {
                    feed_id: parsed.id,
                    price: parsed.price.price.value()?,
                    conf: parsed.price.conf.value()?,
                    expo: parsed.price.expo,
                    publish_time: parsed.price.publish_time,
                })
            })
            .collect()
    }

    fn classify_transport_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.config.timeout)
        } else {
            FetchError::Connection(error)
        }
    }
}

/// Raw catalog entry from `/v2/price_feeds`
#[derive(Debug, Deserialize)]
struct FeedEntry {
    id: String,
    attributes: FeedAttributes,
}

#[derive(Debug, Deserialize)]
struct FeedAttributes {
    description: String,
    #[serde(default)]
    base: Option<String>,
}

/// Raw response from `/v2/updates/price/latest`
#[derive(Debug, Deserialize)]
struct LatestPriceResponse {
    parsed: Vec<ParsedPrice>,
}

#[derive(Debug, Deserialize)]
struct ParsedPrice {
    id: String,
    price: PriceData,
}

#[derive(Debug, Deserialize)]
struct PriceData {
    price: Mantissa,
    conf: Mantissa,
    expo: i32,
    publish_time: i64,
}

/// Hermes serializes mantissas as strings; accept bare integers too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Mantissa {
    Text(String),
    Int(i64),
}

impl Mantissa {
    fn value(&self) -> Result<i64, FetchError> {
        match self {
            Mantissa::Int(v) => Ok(*v),
            Mantissa::Text(s) => s
                .parse()
                .map_err(|_| FetchError::MalformedResponse(format!("invalid mantissa: {s}"))),
        }
    }
}
