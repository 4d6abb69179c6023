//! sitelen-api crate
//!
//! Web server providing transliteration and glyph search as an HTTP API.
//!
//! ## Endpoints
//! - `POST /convert` - Latin transcription → glyphs
//! - `POST /search` - Ranked glyph search
//! - `POST /unknown` - Words missing from the vocabulary
//! - `GET /entries/{word}` - Glyph details
//! - `POST /reload` - Re-read the vocabulary feeds
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/convert \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "mi toki pona"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ConvertRequest, ConvertResponse, EntryDto, SearchRequest, SearchResponse};
pub use service::SitelenApiServiceFull;
