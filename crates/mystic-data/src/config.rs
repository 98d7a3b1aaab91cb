//! Backend location settings.

use std::time::Duration;

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_ENV: &str = "MYSTIC_BACKEND_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Path of the product listing endpoint, relative to the base URL.
pub const PRODUCTS_PATH: &str = "/api/products";

/// Where and how to reach the product listing endpoint.
///
/// The base URL is not validated here. A malformed value surfaces as a
/// failed fetch, which the storefront already tolerates.
#[derive(Debug, Clone, PartialEq)]
pub struct DataConfig {
    /// Backend base URL, without the `/api` prefix.
    pub base_url: String,
    /// Listing endpoint path.
    pub products_path: String,
    /// Request timeout. Ignored on wasm32, where the browser decides.
    pub timeout: Option<Duration>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl DataConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            products_path: PRODUCTS_PATH.to_string(),
            timeout: None,
        }
    }

    /// Read the base URL from [`BACKEND_URL_ENV`], if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(BACKEND_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(Self::new)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of the listing endpoint.
    pub fn products_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.products_path)
    }
}
