//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_APP_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, ENV_APP_URL, ENV_SERVER_HOST,
    ENV_SERVER_PORT,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Public base URL the site is reachable at
    pub app_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_url: DEFAULT_APP_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unset and empty values both fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            app_url: var(ENV_APP_URL).unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            server_host: var(ENV_SERVER_HOST).unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: var(ENV_SERVER_PORT)
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
