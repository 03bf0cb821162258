//! Price command implementation

use super::output::print_reply;
use crate::catalog::FeedCatalog;
use crate::classifier::OpenAiClassifier;
use crate::config::Config;
use crate::hermes::HermesClient;
use crate::service::PriceService;
use clap::Args;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Ticker symbols to look up (e.g. BTC ETH)
    #[arg(required = true)]
    pub tickers: Vec<String>,
}

impl PriceArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let hermes = HermesClient::new(&config.hermes_base_url);
        let catalog = FeedCatalog::load(&hermes).await?;
        let classifier = OpenAiClassifier::new(&config.openai_api_key, &config.openai_model);
        let service = PriceService::new(catalog, hermes, classifier);

        let reply = service.fetch_prices(&self.tickers).await?;
        print_reply(&reply);
        Ok(())
    }
}
