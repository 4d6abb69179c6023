//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// `/convert`・`/unknown` のテキストと `/search` のクエリに適用する。
/// axum の既定のボディ上限（2MB）より小さくし、クライアントには
/// `text_too_long` エラーが返るようにする。
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost のポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";

/// デフォルトのログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 環境変数名: バインドアドレス
pub const ENV_BIND_ADDR: &str = "SITELEN_API_BIND_ADDR";

/// 環境変数名: 主データのパス
pub const ENV_PRIMARY_DATA: &str = "SITELEN_PRIMARY_DATA";

/// 環境変数名: 補助データのパス（空文字で無効化）
pub const ENV_SUPPLEMENTARY_DATA: &str = "SITELEN_SUPPLEMENTARY_DATA";

/// 環境変数名: ログレベル
pub const ENV_LOG_LEVEL: &str = "SITELEN_LOG_LEVEL";
