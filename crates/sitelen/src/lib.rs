//! sitelen 字形変換ライブラリー
//!
//! ラテン文字表記の toki pona を UCSUR の sitelen pona 字形に変換し、
//! キーワードで字形を検索する

/// 設定モジュール - SitelenConfig 等の設定構造体を定義
pub mod config;

/// 変換モジュール - トークン単位の字形変換と未知語の収集
pub mod converter;

/// エラーモジュール - SitelenError, SitelenResult等のエラー型を定義
pub mod errors;

/// データモデルモジュール - VocabEntry, ConversionOptions等のデータ構造を定義
pub mod models;

/// 検索モジュール - 編集距離とキーワードによるランキング
pub mod searcher;

/// サービスモジュール - SitelenService 等の上位レベルAPIを提供
pub mod service;

/// トークナイザーモジュール - ラテン文字表記を欠落なく分割するスキャナー
pub mod tokenizer;

/// 語彙モジュール - 語彙データの読み込み・参照テーブル・再読み込み
pub mod vocabulary;

/// 再エクスポート
pub use config::SitelenConfig;
pub use converter::{collect_unknown, convert};
pub use errors::{SitelenError, SitelenResult};
pub use models::{ConversionOptions, SearchHit, VocabEntry};
pub use searcher::rank;
pub use service::SitelenService;
pub use vocabulary::{LoadReport, VocabularyTable};
