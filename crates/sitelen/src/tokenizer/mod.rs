//! tokenizer module
pub mod script_tokenizer;

/// 再エクスポート
pub use script_tokenizer::{
  Token, TokenClass, VARIATION_SELECTOR_BASE, ZERO_WIDTH_JOINER, ZERO_WIDTH_NON_JOINER,
  ascii_glyph, split_variation_tail, tokenize, variation_selector,
};
