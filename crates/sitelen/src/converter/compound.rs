//! Compound expansion
//!
//! `toki+pona` stacks two glyphs with a zero-width joiner, `toki-pona` places
//! them side by side with the hyphen glyph in between.

use crate::models::ConversionOptions;
use crate::tokenizer::{ZERO_WIDTH_JOINER, ascii_glyph};
use crate::vocabulary::VocabularyTable;

/// Expands a `+`/`-` joined token piece by piece.
///
/// Applies only when the token contains `+` or `-` and starts with an
/// alphabetic character. Returns `None` when no piece produced output.
pub fn expand_compound(
  table: &VocabularyTable,
  token: &str,
  options: &ConversionOptions,
) -> Option<String> {
  if !token.contains(['+', '-']) {
    return None;
  }
  if !token.chars().next().is_some_and(char::is_alphabetic) {
    return None;
  }

  let mut out = String::new();
  let mut produced = false;

  for piece in split_keeping_joiners(token) {
    match piece {
      "-" => {
        if options.allow_ascii_mapping
          && let Some(glyph) = ascii_glyph('-')
        {
          out.push(glyph);
          produced = true;
        }
      }
      "+" => {
        out.push(ZERO_WIDTH_JOINER);
        produced = true;
      }
      word => match table.lookup(word) {
        Some(glyph) => {
          out.push(glyph);
          produced = true;
        }
        None if options.pass_unknown_through => {
          out.push_str(word);
          produced = true;
        }
        None => {}
      },
    }
  }

  produced.then_some(out)
}

/// Splits on `+` and `-`, yielding each joiner as its own piece.
/// Empty pieces are never yielded.
fn split_keeping_joiners(token: &str) -> Vec<&str> {
  let mut pieces = Vec::new();
  let mut start = 0;

  for (index, c) in token.char_indices() {
    if c == '+' || c == '-' {
      if start < index {
        pieces.push(&token[start..index]);
      }
      pieces.push(&token[index..index + 1]);
      start = index + 1;
    }
  }
  if start < token.len() {
    pieces.push(&token[start..]);
  }

  pieces
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::PrimaryRecord;

  fn table() -> VocabularyTable {
    VocabularyTable::build(
      &[
        PrimaryRecord::new("toki", "F1934", "speech"),
        PrimaryRecord::new("pona", "F1940", "good"),
      ],
      &[],
    )
  }

  fn options(allow_ascii_mapping: bool, pass_unknown_through: bool) -> ConversionOptions {
    ConversionOptions {
      allow_ascii_mapping,
      pass_unknown_through,
      ..ConversionOptions::default()
    }
  }

  #[test]
  fn plus_joins_with_zwj() {
    let out = expand_compound(&table(), "toki+pona", &options(true, true));
    assert_eq!(out.as_deref(), Some("\u{F1934}\u{200D}\u{F1940}"));
  }

  #[test]
  fn hyphen_emits_glyph_only_with_ascii_mapping() {
    let table = table();
    assert_eq!(
      expand_compound(&table, "toki-pona", &options(true, true)).as_deref(),
      Some("\u{F1934}\u{F1995}\u{F1940}")
    );
    assert_eq!(
      expand_compound(&table, "toki-pona", &options(false, true)).as_deref(),
      Some("\u{F1934}\u{F1940}")
    );
  }

  #[test]
  fn unknown_pieces_follow_pass_through() {
    let table = table();
    assert_eq!(
      expand_compound(&table, "toki+xyz", &options(true, true)).as_deref(),
      Some("\u{F1934}\u{200D}xyz")
    );
    assert_eq!(
      expand_compound(&table, "toki+xyz", &options(true, false)).as_deref(),
      Some("\u{F1934}\u{200D}")
    );
  }

  #[test]
  fn nothing_produced_is_none() {
    let out = expand_compound(&table(), "abc-xyz", &options(false, false));
    assert_eq!(out, None);
  }

  #[test]
  fn requires_joiner_and_alphabetic_start() {
    let table = table();
    assert_eq!(expand_compound(&table, "toki", &options(true, true)), None);
    assert_eq!(expand_compound(&table, "+toki", &options(true, true)), None);
    assert_eq!(expand_compound(&table, "1+toki", &options(true, true)), None);
  }

  #[test]
  fn repeated_joiners_skip_empty_pieces() {
    assert_eq!(split_keeping_joiners("a++b-"), vec!["a", "+", "+", "b", "-"]);
    assert_eq!(split_keeping_joiners("toki"), vec!["toki"]);
  }
}
