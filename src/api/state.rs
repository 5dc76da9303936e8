//! Application state shared by all handlers.

use std::sync::Arc;

use crate::config::{Config, SiteConfig};

/// Application state: read-only data built once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Site record rendered into every page
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: Arc::new(site),
        }
    }

    /// Create application state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SiteConfig::from_config(config))
    }
}
