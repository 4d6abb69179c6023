//! Vocabulary table
//!
//! Immutable word → glyph lookup built once from the primary and
//! supplementary feeds. A reload builds a new table and swaps it in; a table
//! is never edited in place.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info};

use crate::models::{PrimaryRecord, SupplementaryRecord, VocabEntry, parse_codepoint};
use crate::vocabulary::report::LoadReport;

/// Word whose glyph is shared by [`ALIAS_WORD`]
const ALIAS_TARGET: &str = "ale";

/// Alternative spelling resolved to the glyph of [`ALIAS_TARGET`]
const ALIAS_WORD: &str = "ali";

/// Read-only vocabulary lookup structure
///
/// - `entries`: primary entries in feed order (used by search and listing)
/// - `codepoints`: lowercase word → codepoint for primary, alias and supplementary names
#[derive(Debug, Clone, Default)]
pub struct VocabularyTable {
  entries: Vec<VocabEntry>,
  positions: HashMap<String, usize>,
  codepoints: HashMap<String, char>,
}

impl VocabularyTable {
  /// Empty table. Every lookup misses.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Builds a table from the two feeds.
  ///
  /// See [`VocabularyTable::build_with_report`] for the rules.
  pub fn build(primary: &[PrimaryRecord], supplementary: &[SupplementaryRecord]) -> Self {
    Self::build_with_report(primary, supplementary, None).0
  }

  /// Builds a table and reports what was accepted.
  ///
  /// # Rules
  /// - Primary: word is trimmed and lowercased, empty words are skipped, the
  ///   codepoint must parse as hex (optional `U+`) and be a Unicode scalar.
  ///   The first record for a word wins.
  /// - `reference_base_url`: when set, entries without their own URL get
  ///   `{base}#{word}`.
  /// - Alias: `ali` resolves to the codepoint of `ale` when present.
  /// - Supplementary: names are cleaned (see [`clean_supplementary_name`]) and
  ///   only added when absent from the map.
  pub fn build_with_report(
    primary: &[PrimaryRecord],
    supplementary: &[SupplementaryRecord],
    reference_base_url: Option<&str>,
  ) -> (Self, LoadReport) {
    let mut report = LoadReport::default();
    let mut table = Self::empty();

    for record in primary {
      let word = record.word.trim().to_lowercase();
      if word.is_empty() {
        report.record_primary_skipped();
        continue;
      }

      let Some(codepoint) = parse_codepoint(&record.codepoint) else {
        debug!(word = %word, codepoint = %record.codepoint, "Skipping primary record with invalid codepoint");
        report.record_primary_skipped();
        continue;
      };

      if table.positions.contains_key(&word) {
        debug!(word = %word, "Skipping duplicate primary record");
        report.record_primary_skipped();
        continue;
      }

      let extended_text = record
        .semantic_text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string);

      let reference_url = record
        .reference_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| reference_base_url.map(|base| format!("{base}#{word}")));

      table.positions.insert(word.clone(), table.entries.len());
      table.codepoints.insert(word.clone(), codepoint);
      table.entries.push(VocabEntry {
        word,
        codepoint,
        gloss: record.definition.trim().to_string(),
        extended_text,
        reference_url,
      });
      report.record_primary_loaded();
    }

    if let Some(&codepoint) = table.codepoints.get(ALIAS_TARGET) {
      table.codepoints.insert(ALIAS_WORD.to_string(), codepoint);
      report.alias_installed = true;
    }

    for record in supplementary {
      let name = clean_supplementary_name(&record.name);
      if name.is_empty() {
        report.record_supplementary_skipped();
        continue;
      }

      match table.codepoints.entry(name) {
        Entry::Occupied(_) => report.record_supplementary_skipped(),
        Entry::Vacant(slot) => match parse_codepoint(&record.code_hex) {
          Some(codepoint) => {
            slot.insert(codepoint);
            report.record_supplementary_added();
          }
          None => {
            debug!(name = %record.name, code_hex = %record.code_hex, "Skipping supplementary record with invalid codepoint");
            report.record_supplementary_skipped();
          }
        },
      }
    }

    info!(
      primary_loaded = report.primary_loaded,
      primary_skipped = report.primary_skipped,
      supplementary_added = report.supplementary_added,
      supplementary_skipped = report.supplementary_skipped,
      "Vocabulary table built"
    );

    (table, report)
  }

  /// Case-insensitive word → codepoint lookup
  pub fn lookup(&self, word: &str) -> Option<char> {
    if word.is_empty() {
      return None;
    }
    self.codepoints.get(&word.to_lowercase()).copied()
  }

  /// Whether the word map knows this word (case-insensitive)
  pub fn contains(&self, word: &str) -> bool {
    self.lookup(word).is_some()
  }

  /// Primary entry for a word (case-insensitive). Supplementary names and the alias have no entry.
  pub fn entry(&self, word: &str) -> Option<&VocabEntry> {
    let index = *self.positions.get(&word.trim().to_lowercase())?;
    self.entries.get(index)
  }

  /// Primary entries in feed order
  pub fn entries(&self) -> &[VocabEntry] {
    &self.entries
  }

  /// Number of primary entries
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the table has no primary entries
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Number of words in the lookup map (primary + alias + supplementary)
  pub fn mapped_word_count(&self) -> usize {
    self.codepoints.len()
  }
}

/// Normalizes a supplementary glyph name.
///
/// Lowercases and trims, removes every parenthetical annotation together with
/// the whitespace around it, then turns `-` into `+` so that hyphenated
/// ligature names line up with the `word+word` stacking syntax.
///
/// e.g. `"Toki-Pona (ligature)"` → `"toki+pona"`
pub fn clean_supplementary_name(name: &str) -> String {
  let lowered = name.trim().to_lowercase();
  let mut cleaned = String::with_capacity(lowered.len());
  let mut rest = lowered.as_str();

  while let Some(open) = rest.find('(') {
    let Some(close) = rest[open..].find(')') else {
      break;
    };
    cleaned.push_str(rest[..open].trim_end());
    rest = rest[open + close + 1..].trim_start();
  }
  cleaned.push_str(rest);

  cleaned.replace('-', "+")
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
