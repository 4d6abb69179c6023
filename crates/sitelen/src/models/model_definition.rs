//! Data Model Definition
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// One glyph of the primary vocabulary
///
/// `word` is always stored lowercase; lookups against it are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
  /// Lowercase Latin-script word (unique within the primary table)
  pub word: String,

  /// Glyph codepoint
  pub codepoint: char,

  /// Short gloss
  pub gloss: String,

  /// Long semantic description
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub extended_text: Option<String>,

  /// Link to an external dictionary entry
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reference_url: Option<String>,
}

impl VocabEntry {
  /// Constructor for VocabEntry without extended text or reference URL
  pub fn new(word: impl Into<String>, codepoint: char, gloss: impl Into<String>) -> Self {
    Self {
      word: word.into().to_lowercase(),
      codepoint,
      gloss: gloss.into(),
      extended_text: None,
      reference_url: None,
    }
  }

  /// Builder that sets the extended description
  #[must_use]
  pub fn with_extended_text(mut self, text: impl Into<String>) -> Self {
    self.extended_text = Some(text.into());
    self
  }

  /// The glyph as a string
  pub fn glyph(&self) -> String {
    self.codepoint.to_string()
  }

  /// `U+XXXX` rendering of the codepoint
  pub fn codepoint_label(&self) -> String {
    format_codepoint(self.codepoint)
  }
}

/// Primary feed record as delivered by the data source
///
/// Every field defaults to empty, and a value of the wrong JSON type reads as
/// empty too, so that a malformed record is skipped during table construction
/// instead of failing the whole feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrimaryRecord {
  /// Latin-script word
  #[serde(default, deserialize_with = "lenient_string")]
  pub word: String,

  /// Hex codepoint, with or without a `U+` prefix
  #[serde(default, deserialize_with = "lenient_string")]
  pub codepoint: String,

  /// Short gloss
  #[serde(default, alias = "gloss", deserialize_with = "lenient_string")]
  pub definition: String,

  /// Long semantic text. Only a JSON string is accepted; anything else counts as absent.
  #[serde(default, alias = "extended_text")]
  pub semantic_space: Option<JsonValue>,

  /// Explicit reference URL
  #[serde(default, deserialize_with = "lenient_optional_string")]
  pub reference_url: Option<String>,
}

impl PrimaryRecord {
  /// Constructor used by tests and programmatic feeds
  pub fn new(
    word: impl Into<String>,
    codepoint: impl Into<String>,
    definition: impl Into<String>,
  ) -> Self {
    Self {
      word: word.into(),
      codepoint: codepoint.into(),
      definition: definition.into(),
      semantic_space: None,
      reference_url: None,
    }
  }

  /// Builder that sets the long semantic text
  #[must_use]
  pub fn with_semantic_space(mut self, text: impl Into<String>) -> Self {
    self.semantic_space = Some(JsonValue::String(text.into()));
    self
  }

  /// Long semantic text, if it was given as a string
  pub fn semantic_text(&self) -> Option<&str> {
    self.semantic_space.as_ref().and_then(JsonValue::as_str)
  }
}

/// Supplementary feed record (extra glyph names such as ligatures)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplementaryRecord {
  /// Glyph name, possibly annotated with a parenthetical
  #[serde(default, deserialize_with = "lenient_string")]
  pub name: String,

  /// Hex codepoint, with or without a `U+` prefix
  #[serde(default, deserialize_with = "lenient_string")]
  pub code_hex: String,
}

impl SupplementaryRecord {
  /// Constructor for SupplementaryRecord
  pub fn new(name: impl Into<String>, code_hex: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      code_hex: code_hex.into(),
    }
  }
}

/// Reads a JSON string; any other JSON value (number, null, object) reads as `""`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(lenient_optional_string(deserializer)?.unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  match JsonValue::deserialize(deserializer)? {
    JsonValue::String(text) => Ok(Some(text)),
    _ => Ok(None),
  }
}

/// Conversion switches
///
/// The engine enforces no defaults; `Default` mirrors the startup state of the
/// interactive tool (everything enabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
  /// Map standalone ASCII punctuation to their glyphs
  pub allow_ascii_mapping: bool,
  /// Emit unknown words as-is instead of dropping them
  pub pass_unknown_through: bool,
  /// Drop runs of spaces and tabs
  pub collapse_whitespace: bool,
  /// Keep line terminators
  pub preserve_line_breaks: bool,
}

impl Default for ConversionOptions {
  fn default() -> Self {
    Self {
      allow_ascii_mapping: true,
      pass_unknown_through: true,
      collapse_whitespace: true,
      preserve_line_breaks: true,
    }
  }
}

/// Search hit with its score
///
/// Ephemeral: produced per query and borrowed from the table snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry<'a> {
  /// Matched entry
  pub entry: &'a VocabEntry,
  /// Total score (always > 0 for returned hits)
  pub score: f64,
}

/// Owned search hit, detached from the table snapshot it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
  /// Matched entry
  pub entry: VocabEntry,
  /// Total score. Zero for plain listings of an empty query.
  pub score: f64,
}

impl From<ScoredEntry<'_>> for SearchHit {
  fn from(hit: ScoredEntry<'_>) -> Self {
    Self {
      entry: hit.entry.clone(),
      score: hit.score,
    }
  }
}

/// Parses codepoint text such as `F1900`, `U+F1900` or `u+f1900`.
///
/// Returns `None` for anything that is not hex or not a Unicode scalar value.
pub fn parse_codepoint(text: &str) -> Option<char> {
  let text = text.trim();
  let hex = text
    .strip_prefix("U+")
    .or_else(|| text.strip_prefix("u+"))
    .unwrap_or(text);
  if hex.is_empty() {
    return None;
  }
  let value = u32::from_str_radix(hex, 16).ok()?;
  char::from_u32(value)
}

/// Renders a codepoint as `U+XXXX` (at least four uppercase hex digits).
pub fn format_codepoint(c: char) -> String {
  format!("U+{:04X}", c as u32)
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
