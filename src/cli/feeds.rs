//! Feeds command implementation

use crate::catalog::FeedCatalog;
use crate::config::Config;
use crate::hermes::HermesClient;
use clap::Args;

#[derive(Args, Debug)]
pub struct FeedsArgs {
    /// Only show feeds whose base symbol equals this value (case-sensitive)
    #[arg(short, long)]
    pub symbol: Option<String>,
}

impl FeedsArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let hermes = HermesClient::new(&config.hermes_base_url);
        let catalog = FeedCatalog::load(&hermes).await?;

        match &self.symbol {
            Some(symbol) => {
                let feeds = catalog.find_by_symbol(symbol);
                if feeds.is_empty() {
                    println!("No feeds with base symbol {symbol}");
                    return Ok(());
                }
                for feed in feeds {
                    println!("{}  {}", feed.id, feed.description);
                }
            }
            None => {
                for feed in catalog.feeds() {
                    let symbol = feed.base_symbol.as_deref().unwrap_or("-");
                    println!("{}  {:8}  {}", feed.id, symbol, feed.description);
                }
                println!("\n{} feeds loaded", catalog.len());
            }
        }

        Ok(())
    }
}
