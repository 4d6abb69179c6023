// crates/sitelen/src/config.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::models::ConversionOptions;

/// Default primary feed file name
pub const DEFAULT_PRIMARY_FILE: &str = "tp_semantic_spaces.json";

/// Default supplementary feed file name
pub const DEFAULT_SUPPLEMENTARY_FILE: &str = "juniko.json";

/// Default base URL for per-word reference links
pub const DEFAULT_REFERENCE_BASE_URL: &str = "https://lipamanka.gay/essays/dictionary";

/// Top-level configuration for sitelen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitelenConfig {
  /// [vocabulary] section
  #[serde(default)]
  pub vocabulary: VocabularyConfig,
  /// [conversion] section
  #[serde(default)]
  pub conversion: ConversionOptions,
  /// [search] section
  #[serde(default)]
  pub search: SearchConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [vocabulary] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyConfig {
  /// Primary feed (JSON array of word records)
  pub primary_path: PathBuf,
  /// Supplementary feed (JSON array of `{name, code_hex}`).
  ///
  /// Optional: when omitted or missing on disk, no supplementary glyphs are added.
  #[serde(default)]
  pub supplementary_path: Option<PathBuf>,
  /// Base URL used to derive per-word reference links (`{base}#{word}`)
  #[serde(default)]
  pub reference_base_url: Option<String>,
  /// Start with an empty table instead of failing when the primary feed is missing
  #[serde(default)]
  pub allow_missing_primary: bool,
}

impl Default for VocabularyConfig {
  fn default() -> Self {
    Self {
      primary_path: PathBuf::from(DEFAULT_PRIMARY_FILE),
      supplementary_path: Some(PathBuf::from(DEFAULT_SUPPLEMENTARY_FILE)),
      reference_base_url: Some(DEFAULT_REFERENCE_BASE_URL.to_string()),
      allow_missing_primary: false,
    }
  }
}

/// [search] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
  /// Default search result limit
  pub default_limit: usize,
  /// Maximum search result limit
  pub max_limit: usize,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      default_limit: 50,
      max_limit: 500,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing_subscriber::EnvFilter`
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::str::FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "trace" => Ok(LogLevel::Trace),
      "debug" => Ok(LogLevel::Debug),
      "info" => Ok(LogLevel::Info),
      "warn" | "warning" => Ok(LogLevel::Warn),
      "error" => Ok(LogLevel::Error),
      other => Err(format!(
        "Unknown log level: {other}. Valid values: trace, debug, info, warn, error"
      )),
    }
  }
}

impl std::fmt::Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

// ===== Accessor Methods =====

impl SitelenConfig {
  /// Builds a configuration for the given feeds with every other value defaulted.
  pub fn with_paths(primary_path: impl Into<PathBuf>, supplementary_path: Option<PathBuf>) -> Self {
    Self {
      vocabulary: VocabularyConfig {
        primary_path: primary_path.into(),
        supplementary_path,
        ..VocabularyConfig::default()
      },
      ..Self::default()
    }
  }

  /// Returns the primary feed path.
  pub fn primary_path(&self) -> &Path {
    &self.vocabulary.primary_path
  }

  /// Returns the supplementary feed path, if configured.
  pub fn supplementary_path(&self) -> Option<&Path> {
    self.vocabulary.supplementary_path.as_deref()
  }

  /// Returns the base URL for reference links, if configured.
  pub fn reference_base_url(&self) -> Option<&str> {
    self.vocabulary.reference_base_url.as_deref()
  }

  /// Returns the conversion options used when a caller gives none.
  pub fn default_conversion_options(&self) -> ConversionOptions {
    self.conversion
  }

  /// Returns the default search result limit.
  pub fn default_search_limit(&self) -> usize {
    self.search.default_limit
  }

  /// Returns the maximum search result limit.
  pub fn max_search_limit(&self) -> usize {
    self.search.max_limit
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `vocabulary.primary_path` is not empty
  /// - `search.default_limit` >= 1
  /// - `search.max_limit` >= `search.default_limit`
  ///
  /// # Errors
  /// Returns the first failing check as a `ConfigError`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.vocabulary.primary_path.as_os_str().is_empty() {
      return Err(ConfigError::EmptyPrimaryPath);
    }

    // search.default_limit >= 1
    if self.search.default_limit < 1 {
      return Err(ConfigError::InvalidSearchDefaultLimit {
        actual: self.search.default_limit,
      });
    }

    // search.max_limit >= search.default_limit
    if self.search.max_limit < self.search.default_limit {
      return Err(ConfigError::InvalidSearchMaxLimit {
        default_limit: self.search.default_limit,
        max_limit: self.search.max_limit,
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
