//! Product catalog module.
//!
//! Contains the product record, its validation, and categories.

mod category;
mod product;

pub use category::{Category, CategoryFilter};
pub use product::{
    decode_products, DecodedProducts, Product, ProductRecord, Rejection, CARD_BENEFITS,
    EXCERPT_CHARS,
};
