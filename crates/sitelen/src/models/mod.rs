//! models module

pub mod model_definition;

pub use model_definition::{
  ConversionOptions, PrimaryRecord, ScoredEntry, SearchHit, SupplementaryRecord, VocabEntry,
  format_codepoint, parse_codepoint,
};
