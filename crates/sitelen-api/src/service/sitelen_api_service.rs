//! Transliteration and glyph search service

use std::time::Instant;

use sitelen::{SitelenConfig, SitelenService};

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{
  ConvertRequest, ConvertResponse, EntryDto, ReloadResponse, SearchRequest, SearchResponse,
  UnknownRequest, UnknownResponse,
};

/// Common interface of the API service
///
/// This trait allows swapping the production implementation
/// (`SitelenApiServiceFull`) with test stubs.
pub trait SitelenApiService: Send + Sync {
  /// Converts Latin-transcription text to glyphs
  ///
  /// # Errors
  /// - text longer than `MAX_TEXT_LENGTH`
  fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse>;

  /// Ranked glyph search
  ///
  /// # Errors
  /// - query longer than `MAX_TEXT_LENGTH`
  fn search(&self, request: SearchRequest) -> Result<SearchResponse>;

  /// Lists the words of a text missing from the vocabulary
  ///
  /// # Errors
  /// - text longer than `MAX_TEXT_LENGTH`
  fn unknown(&self, request: UnknownRequest) -> Result<UnknownResponse>;

  /// Glyph details of one word
  ///
  /// # Errors
  /// - `not_found` when the word has no primary entry
  fn entry(&self, word: &str) -> Result<EntryDto>;

  /// Reloads the vocabulary feeds
  ///
  /// # Errors
  /// - unreadable or unparseable feed (the previous vocabulary stays active)
  fn reload(&self) -> Result<ReloadResponse>;
}

/// Rejects input longer than `MAX_TEXT_LENGTH` bytes.
///
/// Empty input is accepted.
pub fn validate_text_length(text: &str) -> Result<()> {
  let text_bytes = text.len();
  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
  }
  Ok(())
}

/// Production service backed by `SitelenService`
pub struct SitelenApiServiceFull {
  inner: SitelenService,
}

impl SitelenApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (feed paths)
  ///
  /// # Errors
  /// Returns an error if the vocabulary cannot be loaded
  pub fn new(config: &Config) -> Result<Self> {
    Self::from_sitelen_config(&config.to_sitelen_config())
  }

  /// Initializes the service from an already built library configuration
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the vocabulary cannot be loaded
  pub fn from_sitelen_config(config: &SitelenConfig) -> Result<Self> {
    let inner = SitelenService::init(config)?;
    Ok(Self { inner })
  }

  /// Wraps an existing service (e.g. one built with `SitelenService::from_table`)
  #[must_use]
  pub fn from_service(inner: SitelenService) -> Self {
    Self { inner }
  }

  /// Number of primary entries currently loaded
  #[must_use]
  pub fn vocabulary_size(&self) -> usize {
    self.inner.vocabulary_size()
  }
}

/// Production implementation of trait `SitelenApiService`
impl SitelenApiService for SitelenApiServiceFull {
  fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse> {
    validate_text_length(&request.text)?;

    let start = Instant::now();
    let output = match request.options {
      Some(options) => self.inner.convert(&request.text, &options),
      None => self.inner.convert_with_defaults(&request.text),
    };
    let codepoints = self.inner.codepoints(&output);
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    Ok(ConvertResponse {
      output,
      codepoints,
      elapsed_ms,
    })
  }

  fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
    validate_text_length(&request.query)?;

    let entries: Vec<EntryDto> = self
      .inner
      .search(&request.query, request.limit)
      .into_iter()
      .map(EntryDto::from)
      .collect();
    let total = entries.len();

    Ok(SearchResponse { entries, total })
  }

  fn unknown(&self, request: UnknownRequest) -> Result<UnknownResponse> {
    validate_text_length(&request.text)?;
    Ok(UnknownResponse {
      unknown: self.inner.collect_unknown(&request.text),
    })
  }

  fn entry(&self, word: &str) -> Result<EntryDto> {
    self
      .inner
      .entry(word)
      .map(|entry| EntryDto::from(&entry))
      .ok_or_else(|| ApiError::not_found(format!("no glyph for word: {word}")))
  }

  fn reload(&self) -> Result<ReloadResponse> {
    Ok(ReloadResponse::from(self.inner.reload()?))
  }
}
