//! Search module.
//!
//! Contains the catalog filter and the home page's featured selection.

mod featured;
mod filter;

pub use featured::featured_products;
pub use filter::{filter_products, matches};
