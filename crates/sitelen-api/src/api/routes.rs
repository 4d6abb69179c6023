//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{
  get_entry, health_check, post_convert, post_reload, post_search, post_unknown,
};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みのRouter
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/convert", post(post_convert))
    .route("/search", post(post_search))
    .route("/unknown", post(post_unknown))
    .route("/entries/{word}", get(get_entry))
    .route("/reload", post(post_reload))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// バインドまたはサーバーの実行に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("{addr} へのバインドに失敗しました: {e}")))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {e}")))?;

  Ok(())
}
