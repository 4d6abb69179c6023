//! sitelen-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sitelen_api::ApiError;
use sitelen_api::api::AppState;
use sitelen_api::api::run_server;
use sitelen_api::config::Config;
use sitelen_api::service::SitelenApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み
  let config = Config::from_env()?;
  let sitelen_config = config.to_sitelen_config();

  // ロギングの初期化（RUST_LOG が設定ファイルの logging.level より優先）
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(sitelen_config.log_level().as_str()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    bind_addr = %config.bind_addr,
    primary = %config.primary_data.display(),
    supplementary = ?config.supplementary_data,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(SitelenApiServiceFull::from_sitelen_config(&sitelen_config)?);
  tracing::info!(entries = service.vocabulary_size(), "語彙サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
