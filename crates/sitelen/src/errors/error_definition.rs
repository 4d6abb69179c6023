//! エラー定義
//!
//! 変換・検索・未知語収集は失敗しない。
//! エラーが起きるのは設定と語彙の読み込みだけ。

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（SitelenConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// vocabulary.primary_path が空
  #[error("vocabulary.primary_path を指定してください")]
  EmptyPrimaryPath,

  /// search.default_limit < 1
  #[error("search.default_limit は 1 以上である必要があります: actual={actual}")]
  InvalidSearchDefaultLimit {
    /// 実際に指定された値
    actual: usize,
  },

  /// search.max_limit < search.default_limit
  #[error(
    "search.max_limit は search.default_limit 以上である必要があります: \
     default_limit={default_limit}, max_limit={max_limit}"
  )]
  InvalidSearchMaxLimit {
    /// search.default_limit
    default_limit: usize,
    /// search.max_limit
    max_limit: usize,
  },
}

/// 語彙ソース関連のエラー
///
/// 不正なレコード単体はエラーにせず、スキップして `LoadReport` に数える。
/// 読めない・パースできないソースだけが失敗になる。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum VocabularyError {
  /// ソースファイルが存在しない
  #[error("語彙ソースが見つかりません: {0}")]
  SourceNotFound(PathBuf),

  /// ソースファイルの読み込みに失敗
  #[error("語彙ソースの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// ソースファイルがレコードの JSON 配列ではない
  #[error("語彙ソースのパースに失敗しました: path={path:?}, error={source}")]
  Parse {
    /// パースしようとしたパス
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// 統合エラー型
/// sitelen クレートの公開 API は `SitelenResult<T>` でこのエラーを返す。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SitelenError {
  /// 語彙関連のエラー
  #[error(transparent)]
  Vocabulary(#[from] VocabularyError),

  /// 設定関連のエラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// sitelen クレート標準の Result 型
pub type SitelenResult<T> = Result<T, SitelenError>;
