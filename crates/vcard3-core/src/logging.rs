//! Tracing subscriber setup driven by [`LoggingConfig`].
//!
//! The codec only emits events; binaries and tests decide whether and how
//! to install a subscriber.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

impl LoggingConfig {
    /// ## Summary
    /// Parses `level` as an `EnvFilter` directive list, e.g. `info` or
    /// `vcard3_rfc=trace,info`.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if a directive does not parse.
    pub fn env_filter(&self) -> CoreResult<EnvFilter> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            CoreError::ConfigError(format!("invalid logging.level {:?}: {e}", self.level))
        })
    }
}

/// ## Summary
/// Installs a global `fmt` subscriber filtered by `logging.level`.
///
/// ## Errors
/// Returns an error if the level does not parse or a global subscriber is
/// already installed.
pub fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(logging.env_filter()?)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::debug!(level = %logging.level, "Tracing initialized");

    Ok(())
}
