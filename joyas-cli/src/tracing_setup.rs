//! Tracing setup for the joyas binary
//!
//! Usage:
//!   joyas --debug ...              # Debug logging to console
//!   RUST_LOG=joyas_server=debug joyas serve
//!
//! Environment variables:
//!   RUST_LOG                       # Log filter (default: info)
//!
//! Logs go to stderr so `explain` output stays clean on stdout.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level if RUST_LOG is not set)
    pub debug: bool,
}

/// Initialize console tracing.
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        let config = TracingConfig::default();
        let _ = init_tracing(&config);
        let err = init_tracing(&config).expect_err("global subscriber already set");
        assert!(!err.to_string().is_empty());
    }
}
