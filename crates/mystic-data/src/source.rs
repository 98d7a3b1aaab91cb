//! Where the storefront's product list comes from.

use async_trait::async_trait;
use mystic_catalog::{decode_products, Product};

use crate::{DataConfig, FetchClient, FetchError};

/// A source of the full product listing.
///
/// Futures are not required to be `Send`: in the browser the fetch runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait ProductSource {
    /// Load every product the backend lists, in listing order.
    async fn load_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Loads products from `GET {base_url}/api/products`.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: FetchClient,
    products_path: String,
}

impl HttpProductSource {
    /// Create a source for a backend configuration.
    pub fn new(config: DataConfig) -> Result<Self, FetchError> {
        let client = FetchClient::from_config(&config)?;
        Ok(Self::with_client(client, config.products_path))
    }

    /// Create a source over an existing client.
    pub fn with_client(client: FetchClient, products_path: impl Into<String>) -> Self {
        Self {
            client,
            products_path: products_path.into(),
        }
    }

    /// The URL this source fetches.
    pub fn url(&self) -> String {
        self.client.get(self.products_path.as_str()).url().to_string()
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpProductSource {
    async fn load_products(&self) -> Result<Vec<Product>, FetchError> {
        let request = self
            .client
            .get(self.products_path.as_str())
            .accept("application/json");
        tracing::debug!(url = %request.url(), "fetching product listing");

        let response = request.send().await?.error_for_status()?;
        let values: Vec<serde_json::Value> = response.json()?;
        let listed = values.len();

        let decoded = decode_products(values);
        for rejection in &decoded.rejected {
            tracing::warn!(
                index = rejection.index,
                error = %rejection.error,
                "skipping invalid product record"
            );
        }

        tracing::info!(
            listed,
            accepted = decoded.products.len(),
            rejected = decoded.rejected.len(),
            "product listing loaded"
        );

        Ok(decoded.products)
    }
}
