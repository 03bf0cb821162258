//! Configuration types for pythia

/// Environment variable naming the Hermes API base URL
pub const ENV_HERMES_BASE_URL: &str = "HERMES_API_BASE_URL";
/// Environment variable naming the OpenAI API key
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the classifier model
pub const ENV_OPENAI_MODEL: &str = "PYTHIA_OPENAI_MODEL";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "PYTHIA_LOG_LEVEL";

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Root configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Hermes price service
    pub hermes_base_url: String,
    /// Credential for the OpenAI classifier
    pub openai_api_key: String,
    /// Model used for intent classification
    pub openai_model: String,
    /// Default log level when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `HERMES_API_BASE_URL` and `OPENAI_API_KEY` are required; a missing
    /// value is a fatal startup error.
    pub fn from_env() -> anyhow::Result<Self> {
        let hermes_base_url = require(ENV_HERMES_BASE_URL)?;
        let openai_api_key = require(ENV_OPENAI_API_KEY)?;

        Ok(Self {
            hermes_base_url,
            openai_api_key,
            openai_model: std::env::var(ENV_OPENAI_MODEL)
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            log_level: std::env::var(ENV_LOG_LEVEL)
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn require(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => anyhow::bail!("missing required environment variable {name}"),
    }
}
