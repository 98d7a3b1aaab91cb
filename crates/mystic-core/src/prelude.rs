//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use mystic_core::prelude::*;
//! ```

pub use mystic_catalog::{Category, CategoryFilter, Money, Product, ProductId};
pub use mystic_data::{DataConfig, FetchError, HttpProductSource, ProductSource};

pub use crate::{
    CatalogView, DetailView, HomeView, Lifeline, LoadOutcome, LoadTicket, NavEntry,
    OverlayClick, Page, PageView, ProductCard, Storefront, StorefrontConfig,
};
