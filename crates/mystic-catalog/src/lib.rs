//! Catalog domain types and logic for the MysticCharms storefront.
//!
//! This crate holds everything about products that does not need I/O:
//!
//! - **Catalog**: products, categories, wire-record validation
//! - **Search**: the catalog filter (category + free text) and the home
//!   page's featured selection
//! - **Money**: cents-based prices with display formatting
//!
//! # Example
//!
//! ```rust
//! use mystic_catalog::prelude::*;
//!
//! let json = r#"[{
//!     "id": "a1",
//!     "name": "Amethyst Cluster",
//!     "description": "Calming purple crystal.",
//!     "price": 45.99,
//!     "category": "crystals",
//!     "image_url": "https://example.com/a.jpg",
//!     "featured": true
//! }]"#;
//!
//! let values: Vec<serde_json::Value> = serde_json::from_str(json).unwrap();
//! let decoded = decode_products(values);
//! assert!(decoded.rejected.is_empty());
//!
//! let hits = filter_products(&decoded.products, "amethyst", CategoryFilter::All);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].price.display(), "$45.99");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::Money;

pub use catalog::{
    decode_products, Category, CategoryFilter, DecodedProducts, Product, ProductRecord, Rejection,
};
pub use search::{featured_products, filter_products, matches};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        decode_products, Category, CategoryFilter, DecodedProducts, Product, ProductRecord,
        Rejection,
    };

    // Search
    pub use crate::search::{featured_products, filter_products, matches};
}
