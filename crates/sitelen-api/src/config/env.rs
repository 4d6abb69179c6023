//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use sitelen::SitelenConfig;
use sitelen::config::{DEFAULT_PRIMARY_FILE, DEFAULT_SUPPLEMENTARY_FILE, LogLevel};

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, ENV_BIND_ADDR, ENV_LOG_LEVEL, ENV_PRIMARY_DATA,
  ENV_SUPPLEMENTARY_DATA,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Primary feed path
  pub primary_data: PathBuf,
  /// Supplementary feed path (`None` disables the supplementary feed)
  pub supplementary_data: Option<PathBuf>,
  /// Log level used when `RUST_LOG` is not set
  pub log_level: LogLevel,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup.
  ///
  /// `from_env` uses the process environment; tests pass a map instead
  /// (`remove_var` is unsafe in Rust 2024).
  ///
  /// # Errors
  /// Returns an error if the log level is unknown or the primary path is empty
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::errors::Result<Self> {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let primary_data =
      PathBuf::from(lookup(ENV_PRIMARY_DATA).unwrap_or_else(|| DEFAULT_PRIMARY_FILE.to_string()));
    if primary_data.as_os_str().is_empty() {
      return Err(ApiError::config(format!("{ENV_PRIMARY_DATA} must not be empty")));
    }

    let supplementary_data = match lookup(ENV_SUPPLEMENTARY_DATA) {
      Some(path) if path.trim().is_empty() => None,
      Some(path) => Some(PathBuf::from(path)),
      None => Some(PathBuf::from(DEFAULT_SUPPLEMENTARY_FILE)),
    };

    let log_level_str = lookup(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_level = LogLevel::from_str(&log_level_str).map_err(ApiError::config)?;

    Ok(Self {
      bind_addr,
      primary_data,
      supplementary_data,
      log_level,
    })
  }

  /// Builds the library configuration for these feeds.
  #[must_use]
  pub fn to_sitelen_config(&self) -> SitelenConfig {
    let mut config =
      SitelenConfig::with_paths(self.primary_data.clone(), self.supplementary_data.clone());
    config.logging.level = self.log_level;
    config
  }
}
