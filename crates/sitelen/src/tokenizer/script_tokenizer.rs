//! Latin-transcription scanner
//!
//! Splits text into tokens without losing a single character: concatenating
//! the token texts always gives back the input. At every position the first
//! matching class wins, in this order:
//!
//! 1. line terminator (`\r\n`, `\r`, `\n`)
//! 2. run of spaces and tabs
//! 3. word-like run: an ASCII letter followed by ASCII letters, digits, `-`, `+`
//! 4. one mapped ASCII punctuation mark (see [`ascii_glyph`])
//! 5. any other single character

/// Zero-width joiner (stacks two glyphs)
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Zero-width non-joiner
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';

/// Variation selector emitted for digit `1`. Digit `d` maps to this + (d - 1).
pub const VARIATION_SELECTOR_BASE: u32 = 0xE0100;

/// Token class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
  /// `\r\n`, `\r` or `\n`
  LineBreak,
  /// One or more spaces / tabs
  Whitespace,
  /// Letter-led run of letters, digits, `-` and `+`
  WordLike,
  /// Single ASCII punctuation mark that has a glyph
  MappedPunctuation,
  /// Any other single character
  Other,
}

/// Slice of the input with its class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
  /// Token text (borrowed from the input)
  pub text: &'a str,
  /// Token class
  pub class: TokenClass,
}

impl<'a> Token<'a> {
  fn new(text: &'a str, class: TokenClass) -> Self {
    Self { text, class }
  }

  /// Whether the token is a line break or a whitespace run
  pub fn is_layout(&self) -> bool {
    matches!(self.class, TokenClass::LineBreak | TokenClass::Whitespace)
  }
}

/// Glyph for a standalone ASCII punctuation mark
pub fn ascii_glyph(c: char) -> Option<char> {
  let glyph = match c {
    '[' => '\u{F1990}',
    ']' => '\u{F1991}',
    '=' => '\u{F1992}',
    '-' => '\u{F1995}',
    '+' => '\u{F1996}',
    '(' => '\u{F1997}',
    ')' => '\u{F1998}',
    '_' => '\u{F1999}',
    '{' => '\u{F199A}',
    '}' => '\u{F199B}',
    '.' => '\u{F199C}',
    ':' => '\u{F199D}',
    _ => return None,
  };
  Some(glyph)
}

/// Variation selector for a digit in `1..=8`
pub fn variation_selector(digit: char) -> Option<char> {
  match digit {
    '1'..='8' => char::from_u32(VARIATION_SELECTOR_BASE + (digit as u32 - '1' as u32)),
    _ => None,
  }
}

fn is_word_continue(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '-' || c == '+'
}

/// Tokenizes text. Never fails; the empty string gives no tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
  let mut tokens = Vec::new();
  let mut rest = text;

  while let Some(first) = rest.chars().next() {
    let (len, class) = match first {
      '\r' if rest[1..].starts_with('\n') => (2, TokenClass::LineBreak),
      '\r' | '\n' => (1, TokenClass::LineBreak),
      ' ' | '\t' => (
        rest.find(|c: char| c != ' ' && c != '\t').unwrap_or(rest.len()),
        TokenClass::Whitespace,
      ),
      c if c.is_ascii_alphabetic() => (
        rest[1..]
          .find(|c: char| !is_word_continue(c))
          .map_or(rest.len(), |end| end + 1),
        TokenClass::WordLike,
      ),
      c if ascii_glyph(c).is_some() => (1, TokenClass::MappedPunctuation),
      c => (c.len_utf8(), TokenClass::Other),
    };

    let (head, tail) = rest.split_at(len);
    tokens.push(Token::new(head, class));
    rest = tail;
  }

  tokens
}

/// Splits a token such as `toki2` or `ni33` into its base and variation digits.
///
/// The base must start with an ASCII letter and contain only letters and
/// `-`; the tail is every trailing digit, each in `1..=8`.
///
/// e.g. `"toki2"` → `Some(("toki", "2"))`, `"toki9"` → `None`
pub fn split_variation_tail(token: &str) -> Option<(&str, &str)> {
  let split = token.find(|c: char| c.is_ascii_digit())?;
  let (base, digits) = token.split_at(split);

  let mut base_chars = base.chars();
  if !base_chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
    return None;
  }
  if !base_chars.all(|c| c.is_ascii_alphabetic() || c == '-') {
    return None;
  }
  if !digits.chars().all(|c| matches!(c, '1'..='8')) {
    return None;
  }

  Some((base, digits))
}
