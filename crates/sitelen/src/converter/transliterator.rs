//! Latin → glyph transliteration
//!
//! Token by token, with no state carried between tokens. Each token is
//! resolved by the first rule that applies:
//!
//! 1. line break: kept iff `preserve_line_breaks`
//! 2. whitespace run: kept iff not `collapse_whitespace`
//! 3. literal ZWJ / ZWNJ: kept as is
//! 4. mapped ASCII punctuation (iff `allow_ascii_mapping`): its glyph
//! 5. contains `+`: compound expansion
//! 6. whole-token lookup
//! 7. variation tail (`toki2`): base glyph followed by variation selectors
//! 8. contains `+` or `-`: compound expansion again
//! 9. anything else: kept iff `pass_unknown_through`

use crate::converter::compound::expand_compound;
use crate::models::ConversionOptions;
use crate::tokenizer::{
  Token, TokenClass, ZERO_WIDTH_JOINER, ZERO_WIDTH_NON_JOINER, ascii_glyph, split_variation_tail,
  tokenize, variation_selector,
};
use crate::vocabulary::VocabularyTable;

/// Converts Latin-transcription text to glyph text.
///
/// Never fails: every input has a defined output.
pub fn convert(table: &VocabularyTable, text: &str, options: &ConversionOptions) -> String {
  let mut out = String::with_capacity(text.len());
  for token in tokenize(text) {
    convert_token(table, token, options, &mut out);
  }
  out
}

fn convert_token(
  table: &VocabularyTable,
  token: Token<'_>,
  options: &ConversionOptions,
  out: &mut String,
) {
  let text = token.text;

  match token.class {
    TokenClass::LineBreak => {
      if options.preserve_line_breaks {
        out.push_str(text);
      }
      return;
    }
    TokenClass::Whitespace => {
      if !options.collapse_whitespace {
        out.push_str(text);
      }
      return;
    }
    _ => {}
  }

  if is_joiner(text) {
    out.push_str(text);
    return;
  }

  if options.allow_ascii_mapping
    && token.class == TokenClass::MappedPunctuation
    && let Some(glyph) = text.chars().next().and_then(ascii_glyph)
  {
    out.push(glyph);
    return;
  }

  // Explicit stacking wins over a ligature of the same name.
  if text.contains('+')
    && let Some(expanded) = expand_compound(table, text, options)
  {
    out.push_str(&expanded);
    return;
  }

  if let Some(glyph) = table.lookup(text) {
    out.push(glyph);
    return;
  }

  if let Some((base, digits)) = split_variation_tail(text) {
    match table.lookup(base) {
      Some(glyph) => out.push(glyph),
      None if options.pass_unknown_through => out.push_str(base),
      None => {}
    }
    out.extend(digits.chars().filter_map(variation_selector));
    return;
  }

  if let Some(expanded) = expand_compound(table, text, options) {
    out.push_str(&expanded);
    return;
  }

  if options.pass_unknown_through {
    out.push_str(text);
  }
}

fn is_joiner(text: &str) -> bool {
  let mut chars = text.chars();
  matches!(
    (chars.next(), chars.next()),
    (Some(ZERO_WIDTH_JOINER | ZERO_WIDTH_NON_JOINER), None)
  )
}
