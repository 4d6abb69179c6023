//! Unknown word collection

use std::collections::BTreeSet;

use crate::tokenizer::{split_variation_tail, tokenize};
use crate::vocabulary::VocabularyTable;

/// Lists the words of `text` that the table cannot resolve.
///
/// Variation tails are stripped first (`xyz2` reports `xyz`). Only tokens
/// starting with an alphabetic character are considered. The result is
/// lowercase, deduplicated and sorted.
pub fn collect_unknown(table: &VocabularyTable, text: &str) -> Vec<String> {
  let mut unknown = BTreeSet::new();

  for token in tokenize(text) {
    if token.is_layout() {
      continue;
    }

    let base = split_variation_tail(token.text).map_or(token.text, |(base, _)| base);
    if !base.chars().next().is_some_and(char::is_alphabetic) {
      continue;
    }
    if !table.contains(base) {
      unknown.insert(base.to_lowercase());
    }
  }

  unknown.into_iter().collect()
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

  #[test]
  fn collects_sorted_lowercase_unknowns() {
    let unknown = collect_unknown(&table(), "toki Xyzzy abc\nXYZZY pona");
    assert_eq!(unknown, vec!["abc".to_string(), "xyzzy".to_string()]);
  }

  #[test]
  fn strips_variation_tail_first() {
    let unknown = collect_unknown(&table(), "toki2 sona3");
    assert_eq!(unknown, vec!["sona".to_string()]);
  }

  #[test]
  fn ignores_non_alphabetic_tokens() {
    let unknown = collect_unknown(&table(), "[ ] 12 ! \u{200D} . ");
    assert!(unknown.is_empty());
  }

  #[test]
  fn unmapped_compounds_are_reported_whole() {
    let unknown = collect_unknown(&table(), "toki+pona");
    assert_eq!(unknown, vec!["toki+pona".to_string()]);
  }

  #[test]
  fn non_ascii_letters_count_as_words() {
    let unknown = collect_unknown(&table(), "é");
    assert_eq!(unknown, vec!["é".to_string()]);
  }

  #[test]
  fn results_are_disjoint_from_the_table() {
    let table = table();
    for word in collect_unknown(&table, "toki pona li wile moku TOKI") {
      assert!(!table.contains(&word));
    }
  }
}
