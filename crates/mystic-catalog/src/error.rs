//! Catalog error types.

use thiserror::Error;

/// Reasons a product record from the listing endpoint is rejected.
///
/// None of these fail a fetch: the offending record is skipped and the
/// rest of the listing is kept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The record is not an object or lacks a required field.
    #[error("Malformed product record: {0}")]
    Malformed(String),

    /// The category is not one of the known catalog categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The price is negative, not finite, too large, or finer than a cent.
    #[error("Invalid price for {id}: {price}")]
    InvalidPrice { id: String, price: f64 },

    /// A record with the same id was already accepted.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Malformed(e.to_string())
    }
}
