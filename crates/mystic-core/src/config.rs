//! Storefront branding and backend location.

use mystic_data::{DataConfig, DEFAULT_BACKEND_URL};

/// Configuration for a storefront front-end.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Brand name shown in the header logo.
    pub name: String,
    /// Line under the logo.
    pub tagline: String,
    /// Document title.
    pub default_title: String,
    /// Backend base URL. `None` means [`DEFAULT_BACKEND_URL`].
    pub backend_url: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "MysticCharms".to_string(),
            tagline: "Spiritual Treasures & Lucky Charms".to_string(),
            default_title: "MysticCharms | Spiritual Treasures & Lucky Charms".to_string(),
            backend_url: None,
        }
    }
}

impl StorefrontConfig {
    /// Set the backend base URL. Blank values are ignored.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.trim().is_empty() {
            self.backend_url = Some(url);
        }
        self
    }

    /// Effective backend base URL.
    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Data-layer configuration for the product fetch.
    pub fn data_config(&self) -> DataConfig {
        DataConfig::new(self.backend_url())
    }
}
