//! Diagnostic logging setup
//!
//! Events go to stderr so that stdout carries only the JSON result.

use tracing_subscriber::EnvFilter;

use crate::io::configuration::DEFAULT_LOG_FILTER;

/// Build the event filter from `RUST_LOG`, falling back to `fallback`
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global stderr subscriber
///
/// `quiet` lowers the fallback level to errors only. Returns `false` if a
/// subscriber was already installed.
pub fn init_logging(quiet: bool) -> bool {
    let fallback = if quiet { "error" } else { DEFAULT_LOG_FILTER };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
