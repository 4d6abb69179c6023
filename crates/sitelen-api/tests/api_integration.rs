//! API integration tests
//!
//! Verifies HTTP endpoint behaviour through the Router.
//! The stub service needs no vocabulary files; the last section runs the
//! production service over an in-memory table.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
  response::Response,
};
use tempfile::TempDir;
use tower::ServiceExt;

use sitelen::config::LogLevel;
use sitelen::models::PrimaryRecord;
use sitelen::{SitelenConfig, SitelenService, VocabularyTable};
use sitelen_api::{
  api::{AppState, create_router},
  config::{Config, MAX_TEXT_LENGTH},
  errors::{ApiError, Result as ApiResult},
  models::{
    ConvertRequest, ConvertResponse, EntryDto, ReloadResponse, SearchRequest, SearchResponse,
    UnknownRequest, UnknownResponse,
  },
  service::{SitelenApiService, SitelenApiServiceFull, validate_text_length},
};

/// Lightweight stub service for integration tests
///
/// - over-long text: `text_too_long` error
/// - convert: echoes the text upper-cased
/// - entry: only "toki" exists
/// - reload: always fails
struct StubSitelenApiService;

impl SitelenApiService for StubSitelenApiService {
  fn convert(&self, request: ConvertRequest) -> ApiResult<ConvertResponse> {
    validate_text_length(&request.text)?;
    Ok(ConvertResponse {
      output: request.text.to_uppercase(),
      codepoints: String::new(),
      elapsed_ms: 0,
    })
  }

  fn search(&self, request: SearchRequest) -> ApiResult<SearchResponse> {
    validate_text_length(&request.query)?;
    Ok(SearchResponse {
      entries: Vec::new(),
      total: 0,
    })
  }

  fn unknown(&self, request: UnknownRequest) -> ApiResult<UnknownResponse> {
    validate_text_length(&request.text)?;
    Ok(UnknownResponse {
      unknown: vec![request.text],
    })
  }

  fn entry(&self, word: &str) -> ApiResult<EntryDto> {
    if word != "toki" {
      return Err(ApiError::not_found(format!("no glyph for word: {word}")));
    }
    Ok(EntryDto {
      word: "toki".to_string(),
      glyph: "\u{F1934}".to_string(),
      codepoint: "U+F1934".to_string(),
      gloss: "speech".to_string(),
      extended_text: None,
      reference_url: None,
      score: None,
    })
  }

  fn reload(&self) -> ApiResult<ReloadResponse> {
    Err(ApiError::config("vocabulary source not found: words.json"))
  }
}

fn test_config() -> Config {
  Config {
    bind_addr: "127.0.0.1:0".to_string(),
    primary_data: PathBuf::from("unused.json"),
    supplementary_data: None,
    log_level: LogLevel::Info,
  }
}

/// Builds the Router with the stub service
fn test_app() -> Router {
  let service: Arc<dyn SitelenApiService> = Arc::new(StubSitelenApiService);
  create_router(AppState::new(test_config(), service))
}

/// Builds the Router with the production service over an in-memory table
fn full_app() -> Router {
  let table = VocabularyTable::build(
    &[
      PrimaryRecord::new("toki", "F1934", "speech, language"),
      PrimaryRecord::new("pona", "F1940", "good, simple"),
      PrimaryRecord::new("telo", "F1946", "water"),
    ],
    &[],
  );
  let inner = SitelenService::from_table(table, &SitelenConfig::with_paths("unused.json", None));
  let service: Arc<dyn SitelenApiService> = Arc::new(SitelenApiServiceFull::from_service(inner));
  create_router(AppState::new(test_config(), service))
}

async fn post_json(app: Router, uri: &str, payload: serde_json::Value) -> Response {
  app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap(),
    )
    .await
    .expect("request should succeed")
}

async fn get(app: Router, uri: &str) -> Response {
  app
    .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
    .await
    .expect("request should succeed")
}

async fn body_json(response: Response) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

// ============================================================================
// Success cases
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let response = get(test_app(), "/health").await;
  assert_eq!(response.status(), StatusCode::OK);

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  assert_eq!(body_bytes.as_ref(), b"OK");
}

#[tokio::test]
async fn post_convert_success_returns_200() {
  let response = post_json(test_app(), "/convert", serde_json::json!({ "text": "toki" })).await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["output"], "TOKI");
  assert!(json.get("codepoints").is_some());
  assert!(json.get("elapsed_ms").is_some());
}

#[tokio::test]
async fn post_convert_empty_text_returns_200() {
  let response = post_json(test_app(), "/convert", serde_json::json!({ "text": "" })).await;
  assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn post_unknown_returns_list() {
  let response = post_json(test_app(), "/unknown", serde_json::json!({ "text": "xyzzy" })).await;
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(body_json(response).await["unknown"][0], "xyzzy");
}

#[tokio::test]
async fn get_entry_returns_entry() {
  let response = get(test_app(), "/entries/toki").await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["codepoint"], "U+F1934");
  assert!(json.get("score").is_none());
}

// ============================================================================
// Error cases (service errors)
// ============================================================================

#[tokio::test]
async fn get_entry_unknown_word_returns_404() {
  let response = get(test_app(), "/entries/xyzzy").await;
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(response).await["error"]["code"], "not_found");
}

#[tokio::test]
async fn post_convert_too_long_text_returns_400() {
  // MAX_TEXT_LENGTH + 1 bytes: below the axum body limit, so the service check applies
  let long_text = "a".repeat(MAX_TEXT_LENGTH + 1);
  let response = post_json(test_app(), "/convert", serde_json::json!({ "text": long_text })).await;

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"]["code"], "text_too_long");
}

#[tokio::test]
async fn post_reload_failure_returns_500() {
  let response = post_json(test_app(), "/reload", serde_json::json!({})).await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body_json(response).await["error"]["code"], "config_error");
}

// ============================================================================
// JSON parse errors (axum side)
// ============================================================================

#[tokio::test]
async fn post_convert_invalid_json_returns_client_error() {
  let response = test_app()
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/convert")
        .header("content-type", "application/json")
        .body(Body::from("{ invalid json"))
        .unwrap(),
    )
    .await
    .expect("request should succeed");

  // accept whatever the Json extractor returns (400 or 422)
  assert!(
    response.status().is_client_error(),
    "expected 4xx, got: {}",
    response.status()
  );
}

#[tokio::test]
async fn post_search_missing_query_returns_client_error() {
  let response = post_json(test_app(), "/search", serde_json::json!({ "foo": "bar" })).await;
  assert!(
    response.status().is_client_error(),
    "expected 4xx, got: {}",
    response.status()
  );
}

// ============================================================================
// Production service over an in-memory table
// ============================================================================

#[tokio::test]
async fn full_convert_returns_glyphs() {
  let response =
    post_json(full_app(), "/convert", serde_json::json!({ "text": "toki+pona" })).await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["output"], "\u{F1934}\u{200D}\u{F1940}");
  assert_eq!(json["codepoints"], "U+F1934 U+200D U+F1940");
}

#[tokio::test]
async fn full_convert_with_options() {
  let payload = serde_json::json!({
    "text": "toki xyzzy",
    "options": {
      "allow_ascii_mapping": true,
      "pass_unknown_through": false,
      "collapse_whitespace": true,
      "preserve_line_breaks": true
    }
  });
  let response = post_json(full_app(), "/convert", payload).await;
  assert_eq!(body_json(response).await["output"], "\u{F1934}");
}

#[tokio::test]
async fn full_search_ranks_exact_word_first() {
  let response = post_json(full_app(), "/search", serde_json::json!({ "query": "toki" })).await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["entries"][0]["word"], "toki");
  assert_eq!(json["total"], json["entries"].as_array().map_or(0, Vec::len));
}

#[tokio::test]
async fn full_search_blank_query_lists_vocabulary() {
  let response =
    post_json(full_app(), "/search", serde_json::json!({ "query": "", "limit": 2 })).await;

  let json = body_json(response).await;
  assert_eq!(json["total"], 2);
  assert_eq!(json["entries"][0]["word"], "toki");
  assert_eq!(json["entries"][1]["word"], "pona");
}

#[tokio::test]
async fn full_unknown_lists_missing_words() {
  let response = post_json(
    full_app(),
    "/unknown",
    serde_json::json!({ "text": "toki Jan sona2 pona" }),
  )
  .await;

  let json = body_json(response).await;
  assert_eq!(json["unknown"], serde_json::json!(["jan", "sona"]));
}

#[tokio::test]
async fn full_entry_is_case_insensitive() {
  let response = get(full_app(), "/entries/TELO").await;
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(body_json(response).await["gloss"], "water");
}

// ============================================================================
// Production service over vocabulary files
// ============================================================================

/// Writes a one-entry primary feed and returns the app plus the feed path
fn file_backed_app(dir: &TempDir) -> (Router, PathBuf) {
  let primary = dir.path().join("words.json");
  std::fs::write(
    &primary,
    r#"[{"word": "toki", "codepoint": "U+F1934", "definition": "speech"}]"#,
  )
  .expect("write primary feed");

  let config = Config {
    primary_data: primary.clone(),
    ..test_config()
  };
  let service = SitelenApiServiceFull::new(&config).expect("service should load");
  assert_eq!(service.vocabulary_size(), 1);

  let service: Arc<dyn SitelenApiService> = Arc::new(service);
  (create_router(AppState::new(config, service)), primary)
}

#[tokio::test]
async fn reload_picks_up_changed_feed() {
  let dir = TempDir::new().expect("temp dir");
  let (app, primary) = file_backed_app(&dir);

  std::fs::write(
    &primary,
    r#"[
      {"word": "toki", "codepoint": "U+F1934", "definition": "speech"},
      {"word": "pona", "codepoint": "U+F1940", "definition": "good"}
    ]"#,
  )
  .expect("rewrite primary feed");

  let response = post_json(app.clone(), "/reload", serde_json::json!({})).await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["primary_loaded"], 2);
  assert_eq!(
    json["summary"],
    "loaded 2 primary glyph entries; added 0 supplementary glyphs"
  );

  let response = get(app, "/entries/pona").await;
  assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn failed_reload_keeps_serving_previous_vocabulary() {
  let dir = TempDir::new().expect("temp dir");
  let (app, primary) = file_backed_app(&dir);

  std::fs::write(&primary, "{ not json").expect("corrupt primary feed");

  let response = post_json(app.clone(), "/reload", serde_json::json!({})).await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body_json(response).await["error"]["code"], "config_error");

  let response = get(app, "/entries/toki").await;
  assert_eq!(response.status(), StatusCode::OK);
}
