//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::SitelenApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Transliteration and search service
  ///
  /// - Production: `Arc::new(SitelenApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubSitelenApiService)`
  pub service: Arc<dyn SitelenApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn SitelenApiService>) -> Self {
    Self { config, service }
  }
}
