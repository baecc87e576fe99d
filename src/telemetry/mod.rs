//! Diagnostics for the touch MCP server
//!
//! All diagnostic output goes to stderr; stdout is reserved for the
//! protocol stream. Level selection follows the `RUST_LOG` convention
//! with an `info` default.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default logging level when `RUST_LOG` is not provided
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configure and install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a subscriber has already been installed.
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_installs_once() {
        assert!(init_logging().is_ok());
        assert!(init_logging().is_err());
    }
}
