//! Pages and navigation entries.

use std::fmt;

use serde::Serialize;

/// The page shown in the main content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Catalog,
    /// Renders the catalog view, same as [`Page::Catalog`].
    Categories,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Catalog, Page::Categories];

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::Categories => "categories",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Catalog => "All Products",
            Page::Categories => "Categories",
        }
    }

    /// Whether this page shows the catalog view.
    pub fn renders_catalog(&self) -> bool {
        matches!(self, Page::Catalog | Page::Categories)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One header navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

/// Header navigation with the entry for `current` marked active.
pub fn nav_entries(current: Page) -> Vec<NavEntry> {
    Page::ALL
        .into_iter()
        .map(|page| NavEntry {
            page,
            label: page.label(),
            active: page == current,
        })
        .collect()
}
