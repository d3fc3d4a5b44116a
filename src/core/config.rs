//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

use super::api::{ApiConfig, DEFAULT_TIMEOUT};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the authentication API
    /// Example: https://api.example.com
    /// When unset the browser calls the API on its own origin
    pub backend_url: Option<String>,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("BACKEND_URL").ok(),
            std::env::var("REQUEST_TIMEOUT_MS").ok(),
        )
    }

    fn from_vars(backend_url: Option<String>, request_timeout_ms: Option<String>) -> Self {
        let request_timeout_ms = request_timeout_ms.and_then(|raw| match raw.trim().parse() {
            Ok(0) => {
                // Zero would time out every request before it is sent
                tracing::warn!("Ignoring REQUEST_TIMEOUT_MS=0, using the default");
                None
            }
            Ok(ms) => Some(ms),
            Err(e) => {
                tracing::warn!("Ignoring REQUEST_TIMEOUT_MS={:?}: {}", raw, e);
                None
            }
        });

        Self {
            backend_url: backend_url.filter(|url| !url.trim().is_empty()),
            request_timeout_ms,
        }
    }

    /// Check if an explicit backend is configured
    pub fn has_backend_url(&self) -> bool {
        self.backend_url.is_some()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    /// API settings handed to the browser
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(
            self.backend_url.clone().unwrap_or_default(),
            self.request_timeout(),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
