// crates/sitelen/src/service.rs

//! SitelenService: sitelen クレートの統合ファサード。
//!
//! - 語彙の読み込みと再読み込み (VocabularyManager)
//! - 字形変換と未知語の収集 (converter)
//! - キーワード検索 (searcher)
//!
//! HTTP API などの外部からは、この構造体だけを意識すればよい。
//!
//! # スナップショット
//!
//! 各呼び出しは開始時点のテーブルのスナップショットで処理する。
//! 処理中に再読み込みが走っても、その呼び出しの結果は変わらない。

use std::sync::Arc;

use tracing::info;

use crate::config::SitelenConfig;
use crate::converter;
use crate::errors::SitelenResult;
use crate::models::{ConversionOptions, SearchHit, VocabEntry, format_codepoint};
use crate::searcher;
use crate::vocabulary::{LoadReport, VocabularyManager, VocabularyTable};

/// sitelen クレートの統合ファサード。
pub struct SitelenService {
  /// 初期化に使った設定
  config: SitelenConfig,

  /// 現在の語彙
  manager: VocabularyManager,
}

impl SitelenService {
  /// 初期化（設定の検証 + 語彙の読み込み）
  ///
  /// # Errors
  /// - 設定が不正
  /// - 主データが読めない・パースできない（`allow_missing_primary` を参照）
  /// - 補助データがパースできない
  pub fn init(config: &SitelenConfig) -> SitelenResult<Self> {
    config.validate()?;

    let (manager, report) = VocabularyManager::open(&config.vocabulary)?;
    info!(summary = %report.summary(), clean = report.is_clean(), "SitelenService を初期化しました");

    Ok(Self {
      config: config.clone(),
      manager,
    })
  }

  /// 構築済みのテーブルからサービスを作成する。
  ///
  /// `reload` は `config` に書かれたデータを読む。
  pub fn from_table(table: VocabularyTable, config: &SitelenConfig) -> Self {
    Self {
      config: config.clone(),
      manager: VocabularyManager::with_table(&config.vocabulary, table),
    }
  }

  /// 設定を取得
  pub fn config(&self) -> &SitelenConfig {
    &self.config
  }

  /// 現在のテーブルのスナップショットを取得
  pub fn table(&self) -> Arc<VocabularyTable> {
    self.manager.snapshot()
  }

  /// 現在のテーブルの主データ件数
  pub fn vocabulary_size(&self) -> usize {
    self.manager.snapshot().len()
  }

  /// オプションを指定してテキストを変換
  pub fn convert(&self, text: &str, options: &ConversionOptions) -> String {
    converter::convert(&self.manager.snapshot(), text, options)
  }

  /// 設定の既定オプションでテキストを変換
  pub fn convert_with_defaults(&self, text: &str) -> String {
    self.convert(text, &self.config.default_conversion_options())
  }

  /// キーワード検索。
  ///
  /// `limit` の既定値は `search.default_limit`、上限は `search.max_limit`。
  /// 空のクエリではテーブルをデータ順に（スコア 0 で）列挙する。
  pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SearchHit> {
    let limit = limit
      .unwrap_or(self.config.default_search_limit())
      .min(self.config.max_search_limit());
    let table = self.manager.snapshot();

    if query.trim().is_empty() {
      return table
        .entries()
        .iter()
        .take(limit)
        .map(|entry| SearchHit {
          entry: entry.clone(),
          score: 0.0,
        })
        .collect();
    }

    searcher::rank_scored(&table, query)
      .into_iter()
      .take(limit)
      .map(SearchHit::from)
      .collect()
  }

  /// 語彙にない `text` 中の単語（小文字・ソート済み・重複なし）
  pub fn collect_unknown(&self, text: &str) -> Vec<String> {
    converter::collect_unknown(&self.manager.snapshot(), text)
  }

  /// 主データの単語の字形情報（大文字小文字を区別しない）
  pub fn entry(&self, word: &str) -> Option<VocabEntry> {
    self.manager.snapshot().entry(word).cloned()
  }

  /// `text` の各文字を `U+XXXX` にして空白区切りで返す。
  ///
  /// 例: 変換結果 `"\u{F1934}\u{F1940}"` → `"U+F1934 U+F1940"`
  pub fn codepoints(&self, text: &str) -> String {
    text
      .chars()
      .map(format_codepoint)
      .collect::<Vec<_>>()
      .join(" ")
  }

  /// 設定されたデータから語彙を再構築する。
  ///
  /// エラー時は現在のテーブルをそのまま使い続ける。
  pub fn reload(&self) -> SitelenResult<LoadReport> {
    Ok(self.manager.reload()?)
  }
}

impl std::fmt::Debug for SitelenService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SitelenService")
      .field("manager", &self.manager)
      .finish_non_exhaustive()
  }
}
