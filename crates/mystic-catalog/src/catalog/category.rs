//! Catalog categories and the catalog page's category selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// The fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Crystals,
    SpiritualJewelry,
    Amulets,
    Talismans,
    ProtectionCharms,
    HealingStones,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Category; 6] = [
        Category::Crystals,
        Category::SpiritualJewelry,
        Category::Amulets,
        Category::Talismans,
        Category::ProtectionCharms,
        Category::HealingStones,
    ];

    /// Wire value (e.g. "spiritual_jewelry").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Crystals => "crystals",
            Category::SpiritualJewelry => "spiritual_jewelry",
            Category::Amulets => "amulets",
            Category::Talismans => "talismans",
            Category::ProtectionCharms => "protection_charms",
            Category::HealingStones => "healing_stones",
        }
    }

    /// Title-case label used on filter buttons (e.g. "Spiritual Jewelry").
    pub fn label(&self) -> &'static str {
        match self {
            Category::Crystals => "Crystals",
            Category::SpiritualJewelry => "Spiritual Jewelry",
            Category::Amulets => "Amulets",
            Category::Talismans => "Talismans",
            Category::ProtectionCharms => "Protection Charms",
            Category::HealingStones => "Healing Stones",
        }
    }

    /// Lowercase name shown on cards and in the detail view.
    ///
    /// Only the first underscore becomes a space; every wire value has at
    /// most one.
    pub fn display_name(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Exact match on the wire value, no normalization.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// The catalog page's local category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Every selector in button order: "All Products" first.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Check whether a category passes this selector.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// Selector value ("all" or a category wire value).
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}
