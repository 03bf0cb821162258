//! pythia: Conversational price oracle for Pyth Network price feeds
//!
//! This library provides the core components for:
//! - Feed catalog loading and symbol indexing (Hermes `/v2/price_feeds`)
//! - Ticker-to-feed resolution
//! - Latest-price fetching from the Hermes API
//! - Normalization of exponent-scaled prices into decimal records with
//!   Eastern-time display timestamps
//! - Intent classification of free-text messages via OpenAI
//! - A conversational REPL tying the pipeline together

pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod hermes;
pub mod normalize;
pub mod resolver;
pub mod service;
pub mod telemetry;
