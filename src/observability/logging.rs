//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Derive the default filter from the configured log level
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the config file when set
//! - Safe to call more than once (later calls are no-ops)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives for a log level.
pub fn default_directives(log_level: &str) -> String {
    format!("olympiad_front={level},tower_http={level}", level = log_level)
}

/// Initialize tracing for the process.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
