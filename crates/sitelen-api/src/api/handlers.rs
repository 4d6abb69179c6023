//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{Path, State},
};
use tracing::{debug, error, info, warn};

use crate::errors::{ApiError, Result};
use crate::models::{
  ConvertRequest, ConvertResponse, EntryDto, ReloadResponse, SearchRequest, SearchResponse,
  UnknownRequest, UnknownResponse,
};

use super::state::AppState;

/// CPU・ファイルI/Oバウンドな処理を spawn_blocking で実行する。
///
/// 非同期ランタイムをブロックしないよう分離する。
async fn run_blocking<T, F>(work: F) -> Result<T>
where
  F: FnOnce() -> Result<T> + Send + 'static,
  T: Send + 'static,
{
  tokio::task::spawn_blocking(work).await.map_err(|e| {
    error!(error = %e, "spawn_blocking エラー");
    ApiError::internal("処理の実行に失敗しました")
  })?
}

/// POST /convert エンドポイント
///
/// ラテン文字表記のテキストを字形に変換する。
///
/// # Request Body
/// ```json
/// { "text": "toki pona", "options": { "allow_ascii_mapping": true, ... } }
/// ```
///
/// # Response
/// - 200 OK: 変換成功 `{ "output", "codepoints", "elapsed_ms" }`
/// - 400 Bad Request: テキスト長超過
pub async fn post_convert(
  State(state): State<AppState>,
  Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>> {
  debug!(text_len = request.text.len(), "変換リクエストを受信");

  let service = state.service.clone();
  let response = run_blocking(move || service.convert(request)).await?;

  info!(
    output_len = response.output.len(),
    elapsed_ms = response.elapsed_ms,
    "変換完了"
  );

  Ok(Json(response))
}

/// POST /search エンドポイント
///
/// 空のクエリでは語彙をデータ順に列挙する。
pub async fn post_search(
  State(state): State<AppState>,
  Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
  debug!(query = %request.query, limit = ?request.limit, "検索リクエストを受信");

  let service = state.service.clone();
  let response = run_blocking(move || service.search(request)).await?;

  info!(total = response.total, "検索完了");

  Ok(Json(response))
}

/// POST /unknown エンドポイント
///
/// 語彙にない単語を列挙する。
pub async fn post_unknown(
  State(state): State<AppState>,
  Json(request): Json<UnknownRequest>,
) -> Result<Json<UnknownResponse>> {
  debug!(text_len = request.text.len(), "未知語リクエストを受信");

  let service = state.service.clone();
  let response = run_blocking(move || service.unknown(request)).await?;

  Ok(Json(response))
}

/// GET /entries/{word} エンドポイント
///
/// # Response
/// - 200 OK: 字形情報
/// - 404 Not Found: 主データにない単語
pub async fn get_entry(
  State(state): State<AppState>,
  Path(word): Path<String>,
) -> Result<Json<EntryDto>> {
  debug!(word = %word, "字形情報リクエストを受信");
  state.service.entry(&word).map(Json)
}

/// POST /reload エンドポイント
///
/// 語彙データを再読み込みする。失敗時は以前の語彙をそのまま使う。
pub async fn post_reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>> {
  let service = state.service.clone();
  let response = run_blocking(move || service.reload()).await.inspect_err(|e| {
    warn!(error = %e, "語彙の再読み込みに失敗、以前の語彙を継続使用");
  })?;

  info!(summary = %response.summary, "語彙を再読み込みしました");

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
