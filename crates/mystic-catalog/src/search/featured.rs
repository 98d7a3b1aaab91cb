//! Home page featured selection.

use crate::catalog::Product;

/// Products flagged as featured, in source order, with no limit.
pub fn featured_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).collect()
}
