//! Catalog filter: category selector plus free-text search.

use crate::catalog::{CategoryFilter, Product};

/// Check whether a product passes the catalog filter.
///
/// A product is kept when its category passes `category` and either the
/// search term is empty or it occurs, ignoring case, in the name or the
/// description.
pub fn matches(product: &Product, search_term: &str, category: CategoryFilter) -> bool {
    if !category.admits(product.category) {
        return false;
    }
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

/// Filter products for the catalog page, preserving source order.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches(p, search_term, category))
        .collect()
}
