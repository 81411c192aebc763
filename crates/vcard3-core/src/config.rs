use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_FOLD_WIDTH, DEFAULT_MAX_NESTING_DEPTH, MAX_NESTING_DEPTH, MIN_FOLD_WIDTH,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

/// Separator between the hour, minute and second fields of a `REV` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSeparator {
    /// `22:27:10`, the ISO 8601 extended form.
    #[default]
    Colon,
    /// `22-27-10`.
    Dash,
}

impl TimeSeparator {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Colon => ':',
            Self::Dash => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// How many `AGENT` vCards may be nested inside one another.
    pub max_nesting_depth: usize,
    pub rev_time_separator: TimeSeparator,
    /// Octet width at which binary bodies are folded; `0` disables folding.
    pub fold_width: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            rev_time_separator: TimeSeparator::default(),
            fold_width: DEFAULT_FOLD_WIDTH,
        }
    }
}

impl CodecConfig {
    /// The nesting depth the decoder enforces: `max_nesting_depth` capped at
    /// `MAX_NESTING_DEPTH`, even when the config was never validated.
    #[must_use]
    pub fn nesting_limit(&self) -> usize {
        self.max_nesting_depth.min(MAX_NESTING_DEPTH)
    }

    /// ## Summary
    /// Checks that the configured limits are usable by the codec.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the nesting depth is zero or above
    /// `MAX_NESTING_DEPTH`, or the fold width is non-zero but below the
    /// minimum.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_nesting_depth == 0 {
            return Err(CoreError::ConfigError(
                "codec.max_nesting_depth must be at least 1".to_string(),
            ));
        }

        if self.max_nesting_depth > MAX_NESTING_DEPTH {
            return Err(CoreError::ConfigError(format!(
                "codec.max_nesting_depth must be at most {MAX_NESTING_DEPTH}, got {}",
                self.max_nesting_depth
            )));
        }

        if self.fold_width != 0 && self.fold_width < MIN_FOLD_WIDTH {
            return Err(CoreError::ConfigError(format!(
                "codec.fold_width must be 0 or at least {MIN_FOLD_WIDTH}, got {}",
                self.fold_width
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info` or `vcard3_rfc=trace,info`.
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// Environment variables use the `VCARD3_` prefix and `__` between
    /// sections, e.g. `VCARD3_CODEC__MAX_NESTING_DEPTH=8`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the codec section fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("logging.level", "info")?
            .add_source(
                config::Environment::with_prefix("VCARD3")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.codec.validate()?;

        tracing::debug!(codec = ?settings.codec, "Codec configuration loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
