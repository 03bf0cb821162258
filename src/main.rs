use clap::Parser;
use pythia::cli::{Cli, Commands};
use pythia::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Missing environment configuration is a fatal startup error
    let config = Config::from_env()?;

    pythia::telemetry::init_logging(&config.log_level)?;

    match cli.command {
        Commands::Chat(args) => {
            tracing::info!("Starting conversation loop");
            args.execute(&config).await?;
        }
        Commands::Price(args) => {
            args.execute(&config).await?;
        }
        Commands::Feeds(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Hermes base URL: {}", config.hermes_base_url);
            println!("  OpenAI model: {}", config.openai_model);
            println!("  OpenAI API key: [redacted]");
            println!("  Log level: {}", config.log_level);
        }
    }

    Ok(())
}
