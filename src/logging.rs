//! Logging bootstrap
//!
//! Logs go to stderr so rendered views on stdout stay clean. `RUST_LOG`
//! takes precedence over the configured level.

use anyhow::{Result, bail};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Validate a log level name
///
/// # Returns
/// The lowercase level, or an error naming the valid levels
pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        _ => bail!(
            "Invalid log level '{}'. Valid levels: trace, debug, info, warn, error, off",
            level
        ),
    }
}

/// Install the global tracing subscriber
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init_logging(level: &str) -> Result<()> {
    let fallback_level = normalize_level(level)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
