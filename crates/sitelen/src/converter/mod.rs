//! converter module
//!
//! Pure functions over a `VocabularyTable` snapshot.

pub mod compound;
pub mod transliterator;
pub mod unknown;

/// Re-export
pub use compound::expand_compound;
pub use transliterator::convert;
pub use unknown::collect_unknown;
