//! Response Model Definition

use serde::Serialize;
use sitelen::{LoadReport, SearchHit, VocabEntry};

/// Conversion response
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
  /// Glyph text
  pub output: String,
  /// `U+XXXX` rendering of every character of `output`
  pub codepoints: String,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Glyph entry (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct EntryDto {
  /// Latin-script word
  pub word: String,
  /// The glyph itself
  pub glyph: String,
  /// `U+XXXX` rendering of the codepoint
  pub codepoint: String,
  /// Short gloss
  pub gloss: String,
  /// Long semantic description
  #[serde(skip_serializing_if = "Option::is_none")]
  pub extended_text: Option<String>,
  /// External dictionary link
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reference_url: Option<String>,
  /// Search score (absent for plain lookups)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub score: Option<f64>,
}

impl From<&VocabEntry> for EntryDto {
  fn from(entry: &VocabEntry) -> Self {
    Self {
      word: entry.word.clone(),
      glyph: entry.glyph(),
      codepoint: entry.codepoint_label(),
      gloss: entry.gloss.clone(),
      extended_text: entry.extended_text.clone(),
      reference_url: entry.reference_url.clone(),
      score: None,
    }
  }
}

impl From<SearchHit> for EntryDto {
  fn from(hit: SearchHit) -> Self {
    Self {
      score: Some(hit.score),
      ..Self::from(&hit.entry)
    }
  }
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
  /// Ranked entries
  pub entries: Vec<EntryDto>,
  /// Number of entries returned
  pub total: usize,
}

/// Unknown-word response
#[derive(Debug, Serialize)]
pub struct UnknownResponse {
  /// Lowercase, sorted, unique
  pub unknown: Vec<String>,
}

/// Reload response
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
  /// Load counts
  #[serde(flatten)]
  pub report: LoadReport,
  /// Human readable summary
  pub summary: String,
}

impl From<LoadReport> for ReloadResponse {
  fn from(report: LoadReport) -> Self {
    let summary = report.summary();
    Self { report, summary }
  }
}
