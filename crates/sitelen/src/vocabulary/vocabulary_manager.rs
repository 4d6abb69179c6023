//! Vocabulary Management Module
//!
//! Owns the current `VocabularyTable` snapshot and the feed locations it was
//! built from. Readers take an `Arc` snapshot and keep it for the duration of
//! their call; `reload` builds a complete new table and swaps it in, so a
//! running conversion or search never observes a half-loaded table.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::config::VocabularyConfig;
use crate::errors::VocabularyError;
use crate::vocabulary::loader::{read_primary, read_supplementary};
use crate::vocabulary::report::LoadReport;
use crate::vocabulary::vocabulary_table::VocabularyTable;

/// Vocabulary manager structure
pub struct VocabularyManager {
  /// Primary feed path
  primary_path: PathBuf,

  /// Supplementary feed path (`None` disables the supplementary feed)
  supplementary_path: Option<PathBuf>,

  /// Base URL for derived reference links
  reference_base_url: Option<String>,

  /// Start empty instead of failing when the primary feed is missing
  allow_missing_primary: bool,

  /// Current snapshot. Replaced as a whole, never mutated.
  table: RwLock<Arc<VocabularyTable>>,
}

impl VocabularyManager {
  /// Creates a manager and performs the initial load.
  ///
  /// # Errors
  /// Fails when the primary feed cannot be read or parsed (unless
  /// `allow_missing_primary` is set and the file is simply absent).
  pub fn open(config: &VocabularyConfig) -> Result<(Self, LoadReport), VocabularyError> {
    let manager = Self {
      primary_path: config.primary_path.clone(),
      supplementary_path: config.supplementary_path.clone(),
      reference_base_url: config.reference_base_url.clone(),
      allow_missing_primary: config.allow_missing_primary,
      table: RwLock::new(Arc::new(VocabularyTable::empty())),
    };
    let report = manager.reload()?;
    Ok((manager, report))
  }

  /// Wraps an already built table. `reload` will read the feeds of `config`.
  pub fn with_table(config: &VocabularyConfig, table: VocabularyTable) -> Self {
    Self {
      primary_path: config.primary_path.clone(),
      supplementary_path: config.supplementary_path.clone(),
      reference_base_url: config.reference_base_url.clone(),
      allow_missing_primary: config.allow_missing_primary,
      table: RwLock::new(Arc::new(table)),
    }
  }

  /// Returns the current table snapshot.
  pub fn snapshot(&self) -> Arc<VocabularyTable> {
    self.table.read().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Rebuilds the table from the feeds and swaps it in.
  ///
  /// On error the previous table stays in place.
  pub fn reload(&self) -> Result<LoadReport, VocabularyError> {
    let (table, report) = self.build_from_sources()?;
    self.swap(table);
    info!(summary = %report.summary(), "Vocabulary reloaded");
    Ok(report)
  }

  /// Replaces the current table.
  pub fn swap(&self, table: VocabularyTable) {
    let mut guard = self.table.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(table);
  }

  /// Returns the primary feed path
  pub fn primary_path(&self) -> &Path {
    &self.primary_path
  }

  /// Returns the supplementary feed path
  pub fn supplementary_path(&self) -> Option<&Path> {
    self.supplementary_path.as_deref()
  }

  fn build_from_sources(&self) -> Result<(VocabularyTable, LoadReport), VocabularyError> {
    let primary = match read_primary(&self.primary_path) {
      Ok(records) => records,
      Err(VocabularyError::SourceNotFound(path)) if self.allow_missing_primary => {
        warn!(path = %path.display(), "Primary data file missing, starting with an empty vocabulary");
        Vec::new()
      }
      Err(e) => return Err(e),
    };

    // The supplementary feed is optional: a missing file only disables it.
    let supplementary = match &self.supplementary_path {
      Some(path) => match read_supplementary(path) {
        Ok(records) => records,
        Err(VocabularyError::SourceNotFound(path)) => {
          warn!(path = %path.display(), "Supplementary file not found");
          Vec::new()
        }
        Err(e) => return Err(e),
      },
      None => Vec::new(),
    };

    Ok(VocabularyTable::build_with_report(
      &primary,
      &supplementary,
      self.reference_base_url.as_deref(),
    ))
  }
}

/// Manual `Debug` implementation for `VocabularyManager`
///
/// Shows the feed locations and the size of the current snapshot only.
impl fmt::Debug for VocabularyManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("VocabularyManager")
      .field("primary_path", &self.primary_path)
      .field("supplementary_path", &self.supplementary_path)
      .field("allow_missing_primary", &self.allow_missing_primary)
      .field("entries", &self.snapshot().len())
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn write_primary(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("primary.json");
    fs::write(&path, body).unwrap();
    path
  }

  fn config_for(primary_path: PathBuf, supplementary_path: Option<PathBuf>) -> VocabularyConfig {
    VocabularyConfig {
      primary_path,
      supplementary_path,
      reference_base_url: None,
      allow_missing_primary: false,
    }
  }

  #[test]
  fn open_loads_both_feeds() {
    let temp_dir = TempDir::new().unwrap();
    let primary = write_primary(
      &temp_dir,
      r#"[{"word": "toki", "codepoint": "F1934", "definition": "speech"}]"#,
    );
    let supplementary = temp_dir.path().join("supplementary.json");
    fs::write(&supplementary, r#"[{"name": "toki-pona", "code_hex": "F19A0"}]"#).unwrap();

    let (manager, report) = VocabularyManager::open(&config_for(primary, Some(supplementary))).unwrap();

    assert_eq!(report.primary_loaded, 1);
    assert_eq!(report.supplementary_added, 1);
    let table = manager.snapshot();
    assert_eq!(table.lookup("toki"), Some('\u{F1934}'));
    assert_eq!(table.lookup("toki+pona"), Some('\u{F19A0}'));
  }

  #[test]
  fn missing_supplementary_is_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    let primary = write_primary(
      &temp_dir,
      r#"[{"word": "toki", "codepoint": "F1934", "definition": "speech"}]"#,
    );
    let absent = temp_dir.path().join("absent.json");

    let (manager, report) = VocabularyManager::open(&config_for(primary, Some(absent))).unwrap();
    assert_eq!(report.supplementary_added, 0);
    assert_eq!(manager.snapshot().len(), 1);
  }

  #[test]
  fn missing_primary_fails_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.json");

    let err = VocabularyManager::open(&config_for(absent, None)).unwrap_err();
    assert!(matches!(err, VocabularyError::SourceNotFound(_)));
  }

  #[test]
  fn missing_primary_allowed_gives_empty_table() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(temp_dir.path().join("absent.json"), None);
    config.allow_missing_primary = true;

    let (manager, report) = VocabularyManager::open(&config).unwrap();
    assert_eq!(report, LoadReport::default());
    assert!(manager.snapshot().is_empty());
  }

  #[test]
  fn reload_swaps_snapshot_and_keeps_old_one_alive() {
    let temp_dir = TempDir::new().unwrap();
    let primary = write_primary(
      &temp_dir,
      r#"[{"word": "toki", "codepoint": "F1934", "definition": "speech"}]"#,
    );
    let (manager, _) = VocabularyManager::open(&config_for(primary.clone(), None)).unwrap();

    let before = manager.snapshot();

    fs::write(
      &primary,
      r#"[{"word": "telo", "codepoint": "F1946", "definition": "water"}]"#,
    )
    .unwrap();
    manager.reload().unwrap();

    // a reader holding the old snapshot still sees the old table
    assert_eq!(before.lookup("toki"), Some('\u{F1934}'));
    assert_eq!(before.lookup("telo"), None);

    let after = manager.snapshot();
    assert_eq!(after.lookup("toki"), None);
    assert_eq!(after.lookup("telo"), Some('\u{F1946}'));
  }

  #[test]
  fn failed_reload_keeps_previous_table() {
    let temp_dir = TempDir::new().unwrap();
    let primary = write_primary(
      &temp_dir,
      r#"[{"word": "toki", "codepoint": "F1934", "definition": "speech"}]"#,
    );
    let (manager, _) = VocabularyManager::open(&config_for(primary.clone(), None)).unwrap();

    fs::write(&primary, "not json").unwrap();
    let err = manager.reload().unwrap_err();
    assert!(matches!(err, VocabularyError::Parse { .. }));
    assert_eq!(manager.snapshot().lookup("toki"), Some('\u{F1934}'));
  }

  #[test]
  fn with_table_uses_given_table() {
    let table = VocabularyTable::build(
      &[crate::models::PrimaryRecord::new("pona", "F1940", "good")],
      &[],
    );
    let manager = VocabularyManager::with_table(&VocabularyConfig::default(), table);
    assert_eq!(manager.snapshot().lookup("pona"), Some('\u{F1940}'));
    assert!(format!("{manager:?}").contains("entries: 1"));
  }
}
