//! Keyword ranking over the vocabulary
//!
//! Each whitespace-separated query token is scored against every entry; an
//! entry is returned only when every token scores above zero.
//!
//! Per token:
//! - codepoint bonuses, [`CODEPOINT_BONUS`] each
//! - word match × [`WORD_WEIGHT`], gloss match × [`GLOSS_WEIGHT`]
//! - bonus + word + gloss below [`STRONG_HIT_THRESHOLD`] scores zero
//! - extended text match × [`EXTENDED_WEIGHT`] on top of a strong hit

use std::cell::OnceCell;
use std::cmp::Ordering;

use tracing::debug;

use crate::models::{ScoredEntry, VocabEntry, format_codepoint};
use crate::searcher::edit_distance::{normalize, similarity_normalized};
use crate::vocabulary::VocabularyTable;

/// Exact field match
pub const EXACT_SCORE: f64 = 10.0;
/// Prefix match of a query of at most two chars
pub const SHORT_PREFIX_SCORE: f64 = 3.0;
/// Prefix match
pub const PREFIX_SCORE: f64 = 4.0;
/// Substring match of a query of at least three chars
pub const SUBSTRING_SCORE: f64 = 1.5;
/// Minimum similarity for a fuzzy match
pub const MIN_SIMILARITY: f64 = 0.6;
/// Minimum similarity for a fuzzy match of a query of at most four chars
pub const MIN_SIMILARITY_SHORT: f64 = 0.75;

/// Weight of the word field
pub const WORD_WEIGHT: f64 = 500.0;
/// Weight of the gloss field
pub const GLOSS_WEIGHT: f64 = 80.0;
/// Weight of the extended text field
pub const EXTENDED_WEIGHT: f64 = 5.0;
/// Bonus per matching codepoint interpretation of the token
pub const CODEPOINT_BONUS: f64 = 1200.0;
/// Minimum of bonus + word + gloss for a token to count
pub const STRONG_HIT_THRESHOLD: f64 = 100.0;

const SHORT_QUERY_LEN: usize = 2;
const SUBSTRING_MIN_LEN: usize = 3;
const FUZZY_SHORT_QUERY_LEN: usize = 4;

/// Scores one normalized field against one normalized query token.
///
/// | condition                         | score        |
/// |-----------------------------------|--------------|
/// | equal                             | 10           |
/// | query ≤ 2 chars                   | 3 if prefix  |
/// | prefix                            | 4            |
/// | substring, query ≥ 3 chars        | 1.5          |
/// | otherwise                         | similarity, 0 below 0.6 (0.75 for query ≤ 4 chars) |
pub fn match_score(field: &str, query: &str) -> f64 {
  if field == query {
    return EXACT_SCORE;
  }

  let query_len = query.chars().count();
  if query_len <= SHORT_QUERY_LEN {
    return if field.starts_with(query) {
      SHORT_PREFIX_SCORE
    } else {
      0.0
    };
  }
  if field.starts_with(query) {
    return PREFIX_SCORE;
  }
  if query_len >= SUBSTRING_MIN_LEN && field.contains(query) {
    return SUBSTRING_SCORE;
  }

  let similarity = similarity_normalized(field, query);
  let threshold = if query_len <= FUZZY_SHORT_QUERY_LEN {
    MIN_SIMILARITY_SHORT
  } else {
    MIN_SIMILARITY
  };
  if similarity < threshold { 0.0 } else { similarity }
}

/// Bonus for a token that names the entry's codepoint.
///
/// Each of these adds [`CODEPOINT_BONUS`]:
/// - the token parses as a number equal to the codepoint (`u+`/`0x` prefix or
///   bare hex, or all decimal digits)
/// - the token is the glyph itself
/// - the token rendered as `U+XXXX` equals the entry's rendering
pub fn codepoint_bonus(token: &str, codepoint: char) -> f64 {
  let mut bonus = 0.0;

  if parse_numeral(token) == Some(codepoint as u32) {
    bonus += CODEPOINT_BONUS;
  }

  let mut chars = token.chars();
  if let (Some(c), None) = (chars.next(), chars.next())
    && c == codepoint
  {
    bonus += CODEPOINT_BONUS;
  }

  if render_codepoint_label(token) == format_codepoint(codepoint) {
    bonus += CODEPOINT_BONUS;
  }

  bonus
}

fn strip_hex_prefix(token: &str) -> Option<&str> {
  let lower = token.get(..2)?;
  if lower.eq_ignore_ascii_case("u+") || lower.eq_ignore_ascii_case("0x") {
    Some(&token[2..])
  } else {
    None
  }
}

fn parse_numeral(token: &str) -> Option<u32> {
  if let Some(hex) = strip_hex_prefix(token) {
    return u32::from_str_radix(hex, 16).ok();
  }
  if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
    return token.parse().ok();
  }
  u32::from_str_radix(token, 16).ok()
}

fn render_codepoint_label(token: &str) -> String {
  let digits = strip_hex_prefix(token).unwrap_or(token);
  let trimmed = digits.trim_start_matches('0').to_uppercase();
  format!("U+{trimmed:0>4}")
}

/// Normalized searchable fields of one entry
///
/// The extended text is normalized on first use, which only happens once a
/// token has passed the strong-hit gate.
struct EntryFields<'a> {
  word: String,
  gloss: String,
  extended_source: Option<&'a str>,
  extended: OnceCell<Option<String>>,
}

impl<'a> EntryFields<'a> {
  fn of(entry: &'a VocabEntry) -> Self {
    Self {
      word: normalize(&entry.word),
      gloss: normalize(&entry.gloss),
      extended_source: entry.extended_text.as_deref(),
      extended: OnceCell::new(),
    }
  }

  fn extended(&self) -> Option<&str> {
    self
      .extended
      .get_or_init(|| self.extended_source.map(normalize))
      .as_deref()
  }

  #[cfg(test)]
  fn extended_is_normalized(&self) -> bool {
    self.extended.get().is_some()
  }
}

fn token_score(entry: &VocabEntry, fields: &EntryFields<'_>, token: &str) -> f64 {
  let bonus = codepoint_bonus(token, entry.codepoint);
  let strong = bonus
    + match_score(&fields.word, token) * WORD_WEIGHT
    + match_score(&fields.gloss, token) * GLOSS_WEIGHT;

  // extended text alone never qualifies an entry
  if strong < STRONG_HIT_THRESHOLD {
    return 0.0;
  }

  let extended = fields
    .extended()
    .map_or(0.0, |text| match_score(text, token) * EXTENDED_WEIGHT);

  strong + extended
}

/// Ranks entries against a query and keeps the scores.
///
/// Entries with a non-positive total are dropped. Ordered by score
/// descending, then word, then codepoint. An empty query matches nothing.
pub fn rank_scored<'a>(table: &'a VocabularyTable, query: &str) -> Vec<ScoredEntry<'a>> {
  let normalized = normalize(query);
  let tokens: Vec<&str> = normalized.split_whitespace().collect();
  if tokens.is_empty() {
    return Vec::new();
  }

  debug!(query = %query, tokens = ?tokens, "Ranking vocabulary");

  let mut hits: Vec<ScoredEntry<'a>> = table
    .entries()
    .iter()
    .filter_map(|entry| {
      let fields = EntryFields::of(entry);
      let mut total = 0.0;
      for token in &tokens {
        let score = token_score(entry, &fields, token);
        if score <= 0.0 {
          return None;
        }
        total += score;
      }
      Some(ScoredEntry {
        entry,
        score: total,
      })
    })
    .collect();

  hits.sort_by(compare_hits);

  debug!(hits = hits.len(), "Ranking finished");
  hits
}

/// Ranks entries against a query. See [`rank_scored`].
pub fn rank<'a>(table: &'a VocabularyTable, query: &str) -> Vec<&'a VocabEntry> {
  rank_scored(table, query)
    .into_iter()
    .map(|hit| hit.entry)
    .collect()
}

fn compare_hits(a: &ScoredEntry<'_>, b: &ScoredEntry<'_>) -> Ordering {
  b.score
    .total_cmp(&a.score)
    .then_with(|| a.entry.word.cmp(&b.entry.word))
    .then_with(|| a.entry.codepoint.cmp(&b.entry.codepoint))
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
