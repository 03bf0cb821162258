//! Feed catalog module
//!
//! Holds the full set of Hermes price feeds, loaded once at startup, and
//! answers exact-match lookups by base symbol. The catalog is immutable for
//! the life of the process; concurrent readers need no synchronization.

use crate::hermes::{CatalogError, HermesClient};
use std::collections::HashMap;

/// A single price feed known to Hermes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDescriptor {
    /// Opaque feed identifier
    pub id: String,
    /// Ticker symbol of the base asset, when the feed exposes one
    pub base_symbol: Option<String>,
    /// Human-readable feed description (e.g. "BITCOIN / US DOLLAR")
    pub description: String,
}

/// Lookup structure over the loaded feed set
pub struct FeedCatalog {
    feeds: Vec<FeedDescriptor>,
    by_symbol: HashMap<String, Vec<usize>>,
}

impl FeedCatalog {
    /// Load the catalog from Hermes. Called once at startup; a failure here
    /// is fatal for the process.
    pub async fn load(client: &HermesClient) -> Result<Self, CatalogError> {
        let feeds = client.price_feeds().await?;
        Ok(Self::from_descriptors(feeds))
    }

    /// Build a catalog from an already-loaded feed set
    pub fn from_descriptors(feeds: Vec<FeedDescriptor>) -> Self {
        let mut by_symbol: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, feed) in feeds.iter().enumerate() {
            if let Some(symbol) = &feed.base_symbol {
                by_symbol.entry(symbol.clone()).or_default().push(index);
            }
        }
        Self { feeds, by_symbol }
    }

    /// All descriptors whose base symbol exactly equals `symbol`.
    ///
    /// The match is case-sensitive, mirroring upstream symbol casing. An
    /// empty result is not an error.
    pub fn find_by_symbol(&self, symbol: &str) -> Vec<&FeedDescriptor> {
        self.by_symbol
            .get(symbol)
            .map(|indices| indices.iter().map(|&i| &self.feeds[i]).collect())
            .unwrap_or_default()
    }

    /// All loaded descriptors, in catalog order
    pub fn feeds(&self) -> &[FeedDescriptor] {
        &self.feeds
    }

    /// Number of loaded feeds
    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_descriptor(id: &str, base: Option<&str>, description: &str) -> FeedDescriptor {
    FeedDescriptor {
        id: id.to_string(),
        base_symbol: base.map(str::to_string),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> FeedCatalog {
        FeedCatalog::from_descriptors(vec![
            test_descriptor("feed-btc-usd", Some("BTC"), "BITCOIN / US DOLLAR"),
            test_descriptor("feed-btc-eur", Some("BTC"), "BITCOIN / EURO"),
            test_descriptor("feed-eth-usd", Some("ETH"), "ETHEREUM / US DOLLAR"),
            test_descriptor("feed-no-base", None, "SOME INDEX"),
        ])
    }

    #[test]
    fn test_find_by_symbol_multiple_matches() {
        let catalog = sample_catalog();
        let feeds = catalog.find_by_symbol("BTC");
        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[0].id, "feed-btc-usd");
        assert_eq!(feeds[1].id, "feed-btc-eur");
    }

    #[test]
    fn test_find_by_symbol_no_match() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_symbol("DOGE").is_empty());
    }

    #[test]
    fn test_find_by_symbol_case_sensitive() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_symbol("btc").is_empty());
        assert_eq!(catalog.find_by_symbol("ETH").len(), 1);
    }

    #[test]
    fn test_feeds_without_base_not_indexed() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 4);
        // The no-base feed is loaded but unreachable by symbol
        assert!(catalog.feeds().iter().any(|f| f.id == "feed-no-base"));
        assert!(catalog.find_by_symbol("SOME INDEX").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FeedCatalog::from_descriptors(vec![]);
        assert!(catalog.is_empty());
        assert!(catalog.find_by_symbol("BTC").is_empty());
    }
}
