//! Conversation service
//!
//! Orchestrates one message end to end: classify intent, resolve tickers
//! against the catalog, fetch latest prices, normalize. Per-message failures
//! are caught here and rendered as a readable reply; they never crash the
//! interactive loop.

use crate::catalog::FeedCatalog;
use crate::classifier::{ClassifierError, IntentClassifier};
use crate::hermes::HermesClient;
use crate::normalize::{normalize, PriceRecord};
use crate::resolver::TickerResolver;

/// Reply to one user message
#[derive(Debug)]
pub enum Reply {
    /// Price data for a price request. `records` may be empty when no feed
    /// matched; `unresolved` lists tickers that matched nothing.
    Prices {
        records: Vec<PriceRecord>,
        unresolved: Vec<String>,
    },
    /// Conversational reply, passed through from the classifier or
    /// synthesized from an error
    Chat(String),
}

/// Service processing price-related conversation
pub struct PriceService<C> {
    catalog: FeedCatalog,
    hermes: HermesClient,
    classifier: C,
}

impl<C: IntentClassifier> PriceService<C> {
    pub fn new(catalog: FeedCatalog, hermes: HermesClient, classifier: C) -> Self {
        Self {
            catalog,
            hermes,
            classifier,
        }
    }

    /// The loaded feed catalog
    pub fn catalog(&self) -> &FeedCatalog {
        &self.catalog
    }

    /// Handle one user message. Never fails: every error becomes a
    /// user-facing reply string.
    pub async fn handle_message(&self, message: &str) -> Reply {
        match self.classifier.analyze(message).await {
            Ok(analysis) if analysis.is_price_request => {
                tracing::info!(tickers = ?analysis.tickers, "Price request");
                match self.fetch_prices(&analysis.tickers).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to fetch prices");
                        Reply::Chat(format!("An error occurred: {e:#}"))
                    }
                }
            }
            Ok(analysis) => Reply::Chat(analysis.chat_response),
            Err(ClassifierError::MalformedReply(detail)) => {
                // The reply is data, never code; an unparseable one is
                // recovered as "not a price request".
                tracing::warn!(detail = %detail, "Discarding malformed classifier reply");
                Reply::Chat(
                    "I'm sorry, I couldn't make sense of that. Could you rephrase?".to_string(),
                )
            }
            Err(e) => {
                tracing::error!(error = %e, "Classifier call failed");
                Reply::Chat(format!("An error occurred: {e}"))
            }
        }
    }

    /// Resolve tickers and fetch normalized prices for them.
    ///
    /// Zero resolved feeds is a valid empty result, not an error; the fetch
    /// is short-circuited so Hermes never sees an empty id list.
    pub async fn fetch_prices(&self, tickers: &[String]) -> anyhow::Result<Reply> {
        let resolution = TickerResolver::new(&self.catalog).resolve(tickers);

        if resolution.feeds.is_empty() {
            tracing::warn!(tickers = ?tickers, "No price feeds found for tickers");
            return Ok(Reply::Prices {
                records: Vec::new(),
                unresolved: resolution.unresolved,
            });
        }

        let feed_ids: Vec<String> = resolution.feeds.iter().map(|f| f.id.clone()).collect();
        let raw = self.hermes.latest_prices(&feed_ids).await?;
        let records = normalize(&raw, &resolution.feeds)?;

        Ok(Reply::Prices {
            records,
            unresolved: resolution.unresolved,
        })
    }
}
