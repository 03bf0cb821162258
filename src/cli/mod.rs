//! CLI interface for pythia
//!
//! Provides subcommands for:
//! - `chat`: interactive conversation loop
//! - `price`: one-shot price lookup for explicit tickers
//! - `feeds`: list the loaded feed catalog
//! - `config`: show effective configuration

mod chat;
mod feeds;
mod output;
mod price;

pub use chat::ChatArgs;
pub use feeds::FeedsArgs;
pub use price::PriceArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pythia")]
#[command(about = "Conversational price oracle for Pyth Network price feeds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive conversation loop
    Chat(ChatArgs),
    /// Fetch prices for explicit tickers, bypassing the classifier
    Price(PriceArgs),
    /// List the loaded price feed catalog
    Feeds(FeedsArgs),
    /// Show effective configuration
    Config,
}
