//! Service module

mod sitelen_api_service;

pub use sitelen_api_service::{SitelenApiService, SitelenApiServiceFull, validate_text_length};
