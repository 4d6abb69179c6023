//! JSON vocabulary feed reader
//!
//! Both feeds are JSON arrays of objects. Record-level problems are left to
//! `VocabularyTable::build_with_report`; only file-level problems fail here.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::errors::VocabularyError;
use crate::models::{PrimaryRecord, SupplementaryRecord};

/// Reads the primary feed (`[{ "word", "codepoint", "definition", "semantic_space" }, ...]`)
pub fn read_primary(path: &Path) -> Result<Vec<PrimaryRecord>, VocabularyError> {
  info!(path = %path.display(), "Loading primary vocabulary data");
  read_records(path)
}

/// Reads the supplementary feed (`[{ "name", "code_hex" }, ...]`)
pub fn read_supplementary(path: &Path) -> Result<Vec<SupplementaryRecord>, VocabularyError> {
  info!(path = %path.display(), "Loading supplementary glyph data");
  read_records(path)
}

/// Parses a JSON array of records from a string.
///
/// `origin` is only used for error reporting.
pub fn parse_records<T: DeserializeOwned>(
  json: &str,
  origin: &Path,
) -> Result<Vec<T>, VocabularyError> {
  serde_json::from_str(json).map_err(|e| VocabularyError::Parse {
    path: origin.to_path_buf(),
    source: Arc::new(e),
  })
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, VocabularyError> {
  if !path.is_file() {
    return Err(VocabularyError::SourceNotFound(path.to_path_buf()));
  }

  let json = std::fs::read_to_string(path).map_err(|e| VocabularyError::Read {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;

  parse_records(&json, path)
}
