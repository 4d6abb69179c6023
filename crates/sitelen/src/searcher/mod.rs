//! searcher module
//!
//! Ranked keyword search over the vocabulary entries.

pub mod edit_distance;
pub mod ranking;

/// Re-export
pub use edit_distance::{levenshtein, normalize, normalized_distance, similarity};
pub use ranking::{codepoint_bonus, match_score, rank, rank_scored};
