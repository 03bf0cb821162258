//! Telemetry module
//!
//! Structured logging for the conversational pipeline

mod logging;

pub use logging::init_logging;
