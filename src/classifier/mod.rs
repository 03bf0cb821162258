//! Message intent classification
//!
//! Decides whether a free-text message is asking for a price and, if so,
//! which tickers it mentions. The production implementation calls OpenAI;
//! the trait seam keeps the conversation service testable without it.

mod openai;

pub use openai::{OpenAiClassifier, OPENAI_CHAT_URL};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Structured analysis of one user message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageAnalysis {
    /// Whether the message asks for a price
    pub is_price_request: bool,
    /// Ticker symbols mentioned, upper-cased by the model
    pub tickers: Vec<String>,
    /// Conversational reply to use when this is not a price request
    pub chat_response: String,
}

/// Classification failures
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Transport failure talking to the classifier service
    #[error("classifier request failed: {0}")]
    Request(#[source] reqwest::Error),
    /// Non-2xx response from the classifier service
    #[error("classifier service returned HTTP {0}")]
    Http(reqwest::StatusCode),
    /// The service returned no completion choices
    #[error("classifier returned an empty reply")]
    EmptyReply,
    /// The reply content was not the expected JSON object
    #[error("classifier reply could not be parsed: {0}")]
    MalformedReply(String),
}

/// Seam between the conversation service and the language model
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Analyze a single user message
    async fn analyze(&self, message: &str) -> Result<MessageAnalysis, ClassifierError>;
}
