//! Edit distance over normalized text
//!
//! All lengths and distances count `char`s, never bytes.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds text for comparison.
///
/// - Unicode NFD decomposition
/// - combining marks removed (`é` → `e`)
/// - lowercase
/// - surrounding whitespace trimmed
pub fn normalize(text: &str) -> String {
  let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
  stripped.to_lowercase().trim().to_string()
}

/// Levenshtein distance (unit cost insert / delete / substitute).
///
/// Keeps two rows sized by the shorter input.
pub fn levenshtein(a: &str, b: &str) -> usize {
  let a_chars: Vec<char> = a.chars().collect();
  let b_chars: Vec<char> = b.chars().collect();

  let (long, short) = if a_chars.len() >= b_chars.len() {
    (&a_chars, &b_chars)
  } else {
    (&b_chars, &a_chars)
  };

  if short.is_empty() {
    return long.len();
  }

  let mut previous: Vec<usize> = (0..=short.len()).collect();
  let mut current = vec![0usize; short.len() + 1];

  for (i, long_char) in long.iter().enumerate() {
    current[0] = i + 1;
    for (j, short_char) in short.iter().enumerate() {
      let cost = usize::from(long_char != short_char);
      current[j + 1] = (previous[j + 1] + 1)
        .min(current[j] + 1)
        .min(previous[j] + cost);
    }
    std::mem::swap(&mut previous, &mut current);
  }

  previous[short.len()]
}

/// Levenshtein distance after [`normalize`]
pub fn normalized_distance(a: &str, b: &str) -> usize {
  levenshtein(&normalize(a), &normalize(b))
}

/// `1 - distance / max_len` over normalized strings, in `0.0..=1.0`.
///
/// Two empty strings are fully similar.
pub fn similarity(a: &str, b: &str) -> f64 {
  similarity_normalized(&normalize(a), &normalize(b))
}

/// [`similarity`] for inputs that are already normalized
pub(crate) fn similarity_normalized(a: &str, b: &str) -> f64 {
  let max_len = a.chars().count().max(b.chars().count());
  if max_len == 0 {
    return 1.0;
  }
  1.0 - levenshtein(a, b) as f64 / max_len as f64
}
