//! モデルモジュール

mod request;
mod response;

pub use request::{ConvertRequest, SearchRequest, UnknownRequest};
pub use response::{ConvertResponse, EntryDto, ReloadResponse, SearchResponse, UnknownResponse};
