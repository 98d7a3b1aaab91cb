//! View models rendered by the front-ends.
//!
//! Everything a page shows is computed here from [`Storefront`] state, so a
//! front-end only lays the fields out.
//!
//! [`Storefront`]: crate::Storefront

use mystic_catalog::{CategoryFilter, Product, ProductId};
use serde::Serialize;

/// Text shown while the product listing loads.
pub const LOADING_MESSAGE: &str = "Loading mystical treasures...";

/// Home hero title.
pub const HERO_TITLE: &str = "Discover Your Perfect Lucky Charm";
/// Home hero subtitle.
pub const HERO_SUBTITLE: &str =
    "Handpicked spiritual treasures and mystical artifacts to bring positive energy into your life";
/// Hero feature chips as (icon, label).
pub const HERO_FEATURES: [(&str, &str); 3] = [
    ("🔮", "Authentic Crystals"),
    ("✨", "Spiritual Jewelry"),
    ("🧿", "Protection Charms"),
];
/// Heading over the featured grid.
pub const FEATURED_TITLE: &str = "✨ Featured Lucky Charms";
/// Heading over the category preview.
pub const CATEGORY_PREVIEW_TITLE: &str = "Shop by Category";

/// Catalog page title.
pub const CATALOG_TITLE: &str = "🔮 Product Catalog";
/// Catalog page subtitle.
pub const CATALOG_SUBTITLE: &str = "Explore our complete collection of mystical treasures";
/// Heading over the category filter buttons.
pub const FILTER_TITLE: &str = "Filter by Category:";

/// A static "Shop by Category" card on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryPreview {
    pub title: &'static str,
    pub blurb: &'static str,
    /// Style hook for the card.
    pub class: &'static str,
}

/// The home page's category preview cards.
pub const CATEGORY_PREVIEWS: [CategoryPreview; 3] = [
    CategoryPreview {
        title: "🔮 Crystals & Gems",
        blurb: "Powerful healing stones and crystal formations",
        class: "crystals",
    },
    CategoryPreview {
        title: "✨ Spiritual Jewelry",
        blurb: "Beautiful jewelry with mystical properties",
        class: "jewelry",
    },
    CategoryPreview {
        title: "🧿 Protection Charms",
        blurb: "Amulets and talismans for spiritual protection",
        class: "protection",
    },
];

/// Message shown when the catalog filter matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: &'static str,
    pub hint: &'static str,
}

/// The catalog's empty state.
pub const EMPTY_STATE: EmptyState = EmptyState {
    message: "No products found matching your criteria.",
    hint: "Try adjusting your search or category filter.",
};

/// A product tile in a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub featured: bool,
    pub category: String,
    pub excerpt: String,
    pub benefits: Vec<String>,
    pub price: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            featured: product.featured,
            category: product.category_display(),
            excerpt: product.excerpt(),
            benefits: product.card_benefits().to_vec(),
            price: product.price_display(),
        }
    }
}

/// Home page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    /// Featured products in listing order. May be empty; the home page has
    /// no empty-state message.
    pub featured: Vec<ProductCard>,
    pub categories: Vec<CategoryPreview>,
}

impl HomeView {
    pub(crate) fn new(featured: Vec<&Product>) -> Self {
        Self {
            featured: featured.into_iter().map(ProductCard::from).collect(),
            categories: CATEGORY_PREVIEWS.to_vec(),
        }
    }
}

/// One category filter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub active: bool,
}

/// Catalog page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub filters: Vec<FilterButton>,
    pub cards: Vec<ProductCard>,
    /// Present exactly when `cards` is empty.
    pub empty_state: Option<EmptyState>,
}

impl CatalogView {
    pub(crate) fn new(selected: CategoryFilter, matches: Vec<&Product>) -> Self {
        let filters = CategoryFilter::options()
            .map(|filter| FilterButton {
                filter,
                label: filter.label(),
                active: filter == selected,
            })
            .collect();
        let cards: Vec<ProductCard> = matches.into_iter().map(ProductCard::from).collect();
        let empty_state = cards.is_empty().then_some(EMPTY_STATE);

        Self {
            filters,
            cards,
            empty_state,
        }
    }

    /// "Showing N products".
    pub fn count_line(&self) -> String {
        format!("Showing {} products", self.cards.len())
    }

    /// The active filter.
    pub fn selected(&self) -> CategoryFilter {
        self.filters
            .iter()
            .find(|button| button.active)
            .map(|button| button.filter)
            .unwrap_or_default()
    }
}

/// Full product details for the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub category: String,
    pub price: String,
    pub description: String,
    /// Every benefit; the block is hidden when empty.
    pub benefits: Vec<String>,
    /// Materials joined with ", ", hidden when `None`.
    pub materials: Option<String>,
    /// Hidden when `None`.
    pub origin: Option<String>,
    pub in_stock: bool,
}

impl From<&Product> for DetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            category: product.category_display(),
            price: product.price_display(),
            description: product.description.clone(),
            benefits: product.spiritual_benefits.clone(),
            materials: product.materials_display(),
            origin: product.origin().map(str::to_string),
            in_stock: product.in_stock,
        }
    }
}

/// What the main content area shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum PageView {
    /// The load has not finished; no page content is shown.
    Loading,
    Home(HomeView),
    Catalog(CatalogView),
}
