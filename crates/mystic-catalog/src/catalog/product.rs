//! Product records and their validation at the network boundary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Money;

/// Number of characters kept in a card's description excerpt.
pub const EXCERPT_CHARS: usize = 100;

/// Number of spiritual benefits shown on a product card.
pub const CARD_BENEFITS: usize = 2;

/// A product record exactly as the listing endpoint sends it.
///
/// Optional fields carry the same defaults the backend model uses, so a
/// record that omits them is still valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    #[serde(default)]
    pub spiritual_benefits: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

/// A validated catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: Category,
    /// Free-text description.
    pub description: String,
    /// Price in cents.
    pub price: Money,
    /// Display image URL.
    pub image_url: String,
    /// Whether the product is promoted on the home page.
    pub featured: bool,
    /// Ordered benefit tags; display order matters.
    pub spiritual_benefits: Vec<String>,
    /// Materials, possibly empty.
    pub materials: Vec<String>,
    /// Place of origin, if known.
    pub origin: Option<String>,
    /// Stock flag from the backend.
    pub in_stock: bool,
    /// Creation timestamp as sent by the backend.
    pub created_at: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let category: Category = record.category.parse()?;
        let price = Money::from_decimal(record.price).ok_or_else(|| CatalogError::InvalidPrice {
            id: record.id.clone(),
            price: record.price,
        })?;

        Ok(Product {
            id: ProductId::new(record.id),
            name: record.name,
            category,
            description: record.description,
            price,
            image_url: record.image_url,
            featured: record.featured,
            spiritual_benefits: record.spiritual_benefits,
            materials: record.materials,
            origin: record.origin,
            in_stock: record.in_stock,
            created_at: record.created_at,
        })
    }
}

impl Product {
    /// Decode and validate one element of the listing array.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        let record: ProductRecord = serde_json::from_value(value)?;
        Product::try_from(record)
    }

    /// Price formatted for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Category as shown on cards ("spiritual jewelry").
    pub fn category_display(&self) -> String {
        self.category.display_name()
    }

    /// Card excerpt: the first [`EXCERPT_CHARS`] characters followed by "...".
    ///
    /// The ellipsis is always appended, short descriptions included.
    pub fn excerpt(&self) -> String {
        let head: String = self.description.chars().take(EXCERPT_CHARS).collect();
        format!("{head}...")
    }

    /// The benefits shown on a card.
    pub fn card_benefits(&self) -> &[String] {
        let n = self.spiritual_benefits.len().min(CARD_BENEFITS);
        &self.spiritual_benefits[..n]
    }

    /// Origin, treating an empty string as absent.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref().filter(|o| !o.is_empty())
    }

    /// Materials joined for display, or `None` when there are none.
    pub fn materials_display(&self) -> Option<String> {
        if self.materials.is_empty() {
            None
        } else {
            Some(self.materials.join(", "))
        }
    }
}

/// A listing element that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Position in the listing array.
    pub index: usize,
    /// Why it was rejected.
    pub error: CatalogError,
}

/// Result of decoding a listing: accepted products in source order plus
/// the elements that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedProducts {
    pub products: Vec<Product>,
    pub rejected: Vec<Rejection>,
}

/// Decode a listing element by element.
///
/// Invalid elements are skipped rather than failing the whole listing.
/// When two elements share an id the first one wins.
pub fn decode_products(values: Vec<serde_json::Value>) -> DecodedProducts {
    let mut decoded = DecodedProducts::default();
    let mut seen = HashSet::new();

    for (index, value) in values.into_iter().enumerate() {
        let result = Product::from_json_value(value).and_then(|product| {
            if seen.insert(product.id.clone()) {
                Ok(product)
            } else {
                Err(CatalogError::DuplicateProduct(product.id.into_inner()))
            }
        });

        match result {
            Ok(product) => decoded.products.push(product),
            Err(error) => decoded.rejected.push(Rejection { index, error }),
        }
    }

    decoded
}
