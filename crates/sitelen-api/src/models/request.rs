//! リクエストモデル定義

use serde::Deserialize;
use sitelen::ConversionOptions;

/// 変換リクエスト
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
  /// ラテン文字表記のテキスト
  pub text: String,
  /// 変換オプション（省略時は設定の既定値）
  #[serde(default)]
  pub options: Option<ConversionOptions>,
}

/// 検索リクエスト
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
  /// 検索キーワード（空なら語彙を列挙）
  pub query: String,
  /// 最大件数
  #[serde(default)]
  pub limit: Option<usize>,
}

/// 未知語リクエスト
#[derive(Debug, Deserialize)]
pub struct UnknownRequest {
  /// ラテン文字表記のテキスト
  pub text: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_convert_request_without_options() {
    let req: ConvertRequest = serde_json::from_str(r#"{"text": "toki"}"#).unwrap();
    assert_eq!(req.text, "toki");
    assert!(req.options.is_none());
  }

  #[test]
  fn deserialize_convert_request_with_options() {
    let json = r#"{
      "text": "toki",
      "options": {
        "allow_ascii_mapping": false,
        "pass_unknown_through": false,
        "collapse_whitespace": true,
        "preserve_line_breaks": true
      }
    }"#;
    let req: ConvertRequest = serde_json::from_str(json).unwrap();
    let options = req.options.unwrap();
    assert!(!options.allow_ascii_mapping);
    assert!(!options.pass_unknown_through);
  }

  #[test]
  fn deserialize_empty_text() {
    let req: UnknownRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();
    assert_eq!(req.text, "");
  }

  #[test]
  fn deserialize_search_request() {
    let req: SearchRequest = serde_json::from_str(r#"{"query": "water", "limit": 5}"#).unwrap();
    assert_eq!(req.query, "water");
    assert_eq!(req.limit, Some(5));

    let req: SearchRequest = serde_json::from_str(r#"{"query": ""}"#).unwrap();
    assert!(req.limit.is_none());
  }
}
