//! Chat command implementation
//!
//! Interactive read-eval-print loop. `exit` (case-insensitive), end of
//! input, or Ctrl-C all terminate cleanly.

use super::output::print_reply;
use crate::catalog::FeedCatalog;
use crate::classifier::OpenAiClassifier;
use crate::config::Config;
use crate::hermes::HermesClient;
use crate::service::PriceService;
use clap::Args;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Args, Debug)]
pub struct ChatArgs {}

impl ChatArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let hermes = HermesClient::new(&config.hermes_base_url);
        // Catalog load failure is fatal: nothing can be served without it
        let catalog = FeedCatalog::load(&hermes).await?;
        let classifier = OpenAiClassifier::new(&config.openai_api_key, &config.openai_model);
        let service = PriceService::new(catalog, hermes, classifier);

        println!("Hello! I am Pythia.");
        println!("I am the price oracle of the Pyth Network. I speak truth and only truth.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("\nEnter your message: ");
            std::io::stdout().flush()?;

            let line = tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
                line = lines.next_line() => line?,
            };

            let Some(line) = line else {
                // End of input
                println!("\nGoodbye!");
                return Ok(());
            };

            let message = line.trim();
            if message.is_empty() {
                continue;
            }
            if message.eq_ignore_ascii_case("exit") {
                println!("Goodbye!");
                return Ok(());
            }

            let reply = service.handle_message(message).await;
            print_reply(&reply);
        }
    }
}
