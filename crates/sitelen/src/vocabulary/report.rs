//! 語彙読み込み結果のレポート型定義
//!
//! テーブル構築時の採用・スキップを集計する型を定義します。

use serde::{Deserialize, Serialize};

/// `VocabularyTable` 構築の集計結果
///
/// 主データと補助データそれぞれの採用件数・スキップ件数を集計する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
  /// テーブルに採用された主データのレコード数
  pub primary_loaded: usize,
  /// スキップされた主データのレコード数（空の単語・不正なコードポイント・重複）
  pub primary_skipped: usize,
  /// 単語マップに追加された補助データの名前数
  pub supplementary_added: usize,
  /// スキップされた補助データのレコード数（空の名前・登録済み・不正なコードポイント）
  pub supplementary_skipped: usize,
  /// `ali` → `ale` の別名を登録したか
  pub alias_installed: bool,
}

impl LoadReport {
  /// 全レコードが採用されたか（skipped == 0）
  pub fn is_clean(&self) -> bool {
    self.primary_skipped == 0 && self.supplementary_skipped == 0
  }

  /// 主データの採用を記録
  pub fn record_primary_loaded(&mut self) {
    self.primary_loaded += 1;
  }

  /// 主データのスキップを記録
  pub fn record_primary_skipped(&mut self) {
    self.primary_skipped += 1;
  }

  /// 補助データの追加を記録
  pub fn record_supplementary_added(&mut self) {
    self.supplementary_added += 1;
  }

  /// 補助データのスキップを記録
  pub fn record_supplementary_skipped(&mut self) {
    self.supplementary_skipped += 1;
  }

  /// ステータスバー等に表示する一行の要約
  pub fn summary(&self) -> String {
    format!(
      "loaded {} primary glyph entries; added {} supplementary glyphs",
      self.primary_loaded, self.supplementary_added
    )
  }
}
