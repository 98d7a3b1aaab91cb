//! HTTP client and product source for the MysticCharms storefront.
//!
//! Provides a small builder API over `reqwest` (browser `fetch` on wasm32)
//! and the [`ProductSource`] seam the storefront loads its catalog through.
//!
//! # Example
//!
//! ```rust,ignore
//! use mystic_data::{DataConfig, HttpProductSource, ProductSource};
//!
//! let source = HttpProductSource::new(DataConfig::new("https://api.example.com"))?;
//! let products = source.load_products().await?;
//! ```

mod config;
mod error;
mod request;
mod response;
mod source;

pub use config::{DataConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL, PRODUCTS_PATH};
pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;
pub use source::{HttpProductSource, ProductSource};

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
}

impl FetchClient {
    /// Create a client for a backend configuration.
    pub fn from_config(config: &DataConfig) -> Result<Self, FetchError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a GET request. Relative paths are joined onto the base URL.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = if is_absolute(&url) {
            url
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), url)
        };

        ClientRequestBuilder {
            http: self.http.clone(),
            builder: RequestBuilder::new(full_url),
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// A request builder bound to a client.
#[derive(Debug)]
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// The resolved URL this request will hit.
    pub fn url(&self) -> &str {
        self.builder.url()
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder { url, headers } = self.builder;

        let mut request = self.http.get(&url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{DataConfig, FetchClient, FetchError, HttpProductSource, ProductSource};
}
