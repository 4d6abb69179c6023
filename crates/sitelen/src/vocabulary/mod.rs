//! vocabulary モジュール
//!
//! 語彙データの読み込みと、そこから構築する読み取り専用テーブルを担当します。

pub mod loader;
pub mod report;
pub mod vocabulary_manager;
pub mod vocabulary_table;

/// 主要な型を再エクスポート
pub use report::LoadReport;
pub use vocabulary_manager::VocabularyManager;
pub use vocabulary_table::{VocabularyTable, clean_supplementary_name};
