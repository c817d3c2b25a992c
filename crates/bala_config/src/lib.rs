//! Configuration for the bala strength engine.
//!
//! Load engine tunables, logging and output settings from a TOML file.
//!
//! # Examples
//!
//! ```
//! use bala_config::{BalaConfig, OutputFormat};
//! use bala_vedic_base::DrishtiMode;
//!
//! let config = BalaConfig::from_toml_str(r#"
//!     [shadbala]
//!     drishti_mode = "with_partial_aspects"
//!     obliquity_deg = 23.44
//!
//!     [output]
//!     format = "json"
//! "#).unwrap();
//!
//! assert_eq!(config.shadbala.drishti_mode, DrishtiMode::WithPartialAspects);
//! assert_eq!(config.output.format, OutputFormat::Json);
//! assert_eq!(config.logging.filter, "info");
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use bala_config::BalaConfig;
//!
//! let config = BalaConfig::load("bala.toml").unwrap_or_default();
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use bala_vedic_base::ShadbalaConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BalaConfig {
    /// Shadbala tunables.
    #[serde(default)]
    pub shadbala: ShadbalaConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl BalaConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file without validating it.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.shadbala;
        if !(s.obliquity_deg.is_finite() && s.obliquity_deg > 0.0 && s.obliquity_deg < 90.0) {
            return Err(ConfigError::Invalid(format!(
                "shadbala.obliquity_deg must be in (0, 90), got {}",
                s.obliquity_deg
            )));
        }
        if !(s.stationary_speed_deg.is_finite() && s.stationary_speed_deg >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "shadbala.stationary_speed_deg must be non-negative, got {}",
                s.stationary_speed_deg
            )));
        }
        if !(s.drik_clamp.is_finite() && s.drik_clamp > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "shadbala.drik_clamp must be positive, got {}",
                s.drik_clamp
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter is empty".into()));
        }
        if self.output.precision > 10 {
            return Err(ConfigError::Invalid(format!(
                "output.precision must be at most 10, got {}",
                self.output.precision
            )));
        }
        Ok(())
    }

    /// Sets the tracing filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }

    /// Sets the output format.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info,bala_vedic_base=debug"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places in table output.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned text tables.
    #[default]
    Table,

    /// Pretty-printed JSON.
    Json,
}
