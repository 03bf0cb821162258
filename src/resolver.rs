//! Ticker resolution
//!
//! Maps user-supplied ticker strings to the feed descriptors to fetch. A
//! single ticker may resolve to several feeds (same asset, different quote
//! currencies); matches are appended without deduplication.

use crate::catalog::{FeedCatalog, FeedDescriptor};

/// Outcome of resolving a list of tickers.
///
/// Tickers with no matching feed are reported in `unresolved` rather than
/// silently dropped, so callers can tell the user which symbols were not
/// recognized. Resolution itself never fails.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Matched feeds, in ticker order then catalog order
    pub feeds: Vec<FeedDescriptor>,
    /// Tickers that matched nothing
    pub unresolved: Vec<String>,
}

/// Resolves tickers against the loaded feed catalog
pub struct TickerResolver<'a> {
    catalog: &'a FeedCatalog,
}

impl<'a> TickerResolver<'a> {
    pub fn new(catalog: &'a FeedCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve each ticker to its matching feeds. An empty input yields an
    /// empty result.
    pub fn resolve(&self, tickers: &[String]) -> Resolution {
        let mut resolution = Resolution::default();
        for ticker in tickers {
            let matches = self.catalog.find_by_symbol(ticker);
            if matches.is_empty() {
                tracing::debug!(ticker = %ticker, "No price feed matches ticker");
                resolution.unresolved.push(ticker.clone());
            } else {
                resolution.feeds.extend(matches.into_iter().cloned());
            }
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_descriptor;

    fn sample_catalog() -> FeedCatalog {
        FeedCatalog::from_descriptors(vec![
            test_descriptor("feed-btc-usd", Some("BTC"), "BITCOIN / US DOLLAR"),
            test_descriptor("feed-btc-eur", Some("BTC"), "BITCOIN / EURO"),
            test_descriptor("feed-eth-usd", Some("ETH"), "ETHEREUM / US DOLLAR"),
        ])
    }

    #[test]
    fn test_resolve_empty_input() {
        let catalog = sample_catalog();
        let resolution = TickerResolver::new(&catalog).resolve(&[]);
        assert!(resolution.feeds.is_empty());
        assert!(resolution.unresolved.is_empty());
    }

    #[test]
    fn test_resolve_single_ticker_multiple_feeds() {
        let catalog = sample_catalog();
        let resolution = TickerResolver::new(&catalog).resolve(&["BTC".to_string()]);
        assert_eq!(resolution.feeds.len(), 2);
        assert!(resolution.unresolved.is_empty());
    }

    #[test]
    fn test_resolve_preserves_ticker_order() {
        let catalog = sample_catalog();
        let resolution =
            TickerResolver::new(&catalog).resolve(&["ETH".to_string(), "BTC".to_string()]);
        let ids: Vec<&str> = resolution.feeds.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["feed-eth-usd", "feed-btc-usd", "feed-btc-eur"]);
    }

    #[test]
    fn test_resolve_reports_unresolved() {
        let catalog = sample_catalog();
        let resolution =
            TickerResolver::new(&catalog).resolve(&["BTC".to_string(), "DOGE".to_string()]);
        assert_eq!(resolution.feeds.len(), 2);
        assert_eq!(resolution.unresolved, vec!["DOGE".to_string()]);
    }

    #[test]
    fn test_resolve_all_unmatched() {
        let catalog = sample_catalog();
        let resolution = TickerResolver::new(&catalog).resolve(&["XYZ".to_string()]);
        assert!(resolution.feeds.is_empty());
        assert_eq!(resolution.unresolved, vec!["XYZ".to_string()]);
    }
}
