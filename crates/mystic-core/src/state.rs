//! The storefront's view state and the operations that change it.

use mystic_catalog::{featured_products, filter_products, CategoryFilter, Product, ProductId};
use mystic_data::{FetchError, ProductSource};

use crate::{
    nav_entries, CatalogView, DetailView, HomeView, Lifeline, LoadOutcome, LoadTicket, NavEntry,
    Page, PageView,
};

/// Where a pointer interaction on the detail overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// The dimmed area outside the panel.
    Background,
    /// Anywhere inside the panel, including its action buttons.
    Panel,
    /// The panel's close control.
    CloseButton,
}

/// All client-side state of one storefront session.
///
/// Fields are private; every change goes through a named operation so the
/// invariants below hold between calls:
/// - `catalog_category` is `Some` exactly while the page renders the catalog
/// - `selected` names a product in `products`, or is `None`
///
/// A clone is an independent session: it gets its own [`Lifeline`], so
/// shutting one down never discards loads owned by the other, and tickets
/// issued by one are discarded by the other.
#[derive(Debug)]
pub struct Storefront {
    products: Vec<Product>,
    loading: bool,
    page: Page,
    search_term: String,
    selected: Option<ProductId>,
    catalog_category: Option<CategoryFilter>,
    load_generation: u64,
    lifeline: Lifeline,
}

impl Clone for Storefront {
    fn clone(&self) -> Self {
        Self {
            products: self.products.clone(),
            loading: self.loading,
            page: self.page,
            search_term: self.search_term.clone(),
            selected: self.selected.clone(),
            catalog_category: self.catalog_category,
            load_generation: self.load_generation,
            lifeline: Lifeline::new(),
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    /// Fresh state: Home page, no products, loading.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            page: Page::Home,
            search_term: String::new(),
            selected: None,
            catalog_category: None,
            load_generation: 0,
            lifeline: Lifeline::new(),
        }
    }

    // === Reads ===

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The catalog-local category, present only while the catalog is shown.
    pub fn catalog_category(&self) -> Option<CategoryFilter> {
        self.catalog_category
    }

    /// The product shown in the detail overlay.
    pub fn selected_product(&self) -> Option<&Product> {
        let id = self.selected.as_ref()?;
        self.find(id)
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected_product().is_some()
    }

    /// Look up a product by id in the current list.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Liveness flag shared with every load this state issues.
    pub fn lifeline(&self) -> Lifeline {
        self.lifeline.clone()
    }

    // === Navigation ===

    /// Switch pages.
    ///
    /// Entering the catalog from Home starts with the "all" filter; moving
    /// between Catalog and Categories keeps the current one.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }

        match (self.page.renders_catalog(), page.renders_catalog()) {
            (false, true) => self.catalog_category = Some(CategoryFilter::All),
            (true, false) => self.catalog_category = None,
            _ => {}
        }

        tracing::debug!(from = %self.page, to = %page, "navigate");
        self.page = page;
    }

    /// Logo click.
    pub fn go_home(&mut self) {
        self.navigate(Page::Home);
    }

    /// Header navigation entries for the current page.
    pub fn nav_entries(&self) -> Vec<NavEntry> {
        nav_entries(self.page)
    }

    // === Search and filter ===

    /// Replace the shared search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Pick a catalog category.
    ///
    /// Returns `false`, changing nothing, when the catalog is not shown.
    pub fn select_category(&mut self, filter: CategoryFilter) -> bool {
        match self.catalog_category.as_mut() {
            Some(current) => {
                *current = filter;
                true
            }
            None => false,
        }
    }

    // === Detail overlay ===

    /// Open the detail overlay for `id`.
    ///
    /// Returns `false` when no product with that id is loaded.
    pub fn select_product(&mut self, id: &ProductId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Apply a click on the overlay. Returns whether the overlay closed.
    pub fn handle_overlay_click(&mut self, click: OverlayClick) -> bool {
        if !self.is_detail_open() {
            return false;
        }
        match click {
            OverlayClick::Background | OverlayClick::CloseButton => {
                self.close_detail();
                true
            }
            OverlayClick::Panel => false,
        }
    }

    // === Loading ===

    /// Start a load. Any earlier outstanding ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        self.loading = true;
        LoadTicket {
            generation: self.load_generation,
            lifeline: self.lifeline.clone(),
        }
    }

    /// Apply the result of the load `ticket` was issued for.
    ///
    /// Results for a torn-down view, a superseded load, or a ticket issued
    /// by another state are dropped untouched. A failure is logged and clears `loading` without touching
    /// the product list.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, FetchError>,
    ) -> LoadOutcome {
        let owned = ticket.lifeline.same_flag(&self.lifeline);
        if !owned || !ticket.is_live() || ticket.generation != self.load_generation {
            tracing::debug!(
                generation = ticket.generation,
                current = self.load_generation,
                live = ticket.is_live(),
                owned,
                "discarding late product load"
            );
            return LoadOutcome::Discarded;
        }

        self.loading = false;
        match result {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                if self.selected_product().is_none() {
                    self.selected = None;
                }
                tracing::info!(count, "products loaded");
                LoadOutcome::Loaded { count }
            }
            Err(error) => {
                tracing::error!(%error, "error fetching products");
                LoadOutcome::Failed
            }
        }
    }

    /// Run one load against `source` to completion.
    pub async fn load<S>(&mut self, source: &S) -> LoadOutcome
    where
        S: ProductSource + ?Sized,
    {
        let ticket = self.begin_load();
        let result = source.load_products().await;
        self.finish_load(ticket, result)
    }

    /// Tear down: every outstanding load will be discarded.
    pub fn shutdown(&self) {
        self.lifeline.cancel();
    }

    // === Views ===

    /// Home page content. Independent of search term and catalog filter.
    pub fn home_view(&self) -> HomeView {
        HomeView::new(featured_products(&self.products))
    }

    /// Catalog page content for the current search term and category.
    pub fn catalog_view(&self) -> CatalogView {
        let category = self.catalog_category.unwrap_or_default();
        CatalogView::new(
            category,
            filter_products(&self.products, &self.search_term, category),
        )
    }

    /// Detail overlay content, if open.
    pub fn detail_view(&self) -> Option<DetailView> {
        self.selected_product().map(DetailView::from)
    }

    /// Main content for the current page.
    pub fn page_view(&self) -> PageView {
        if self.loading {
            return PageView::Loading;
        }
        match self.page {
            Page::Home => PageView::Home(self.home_view()),
            Page::Catalog | Page::Categories => PageView::Catalog(self.catalog_view()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mystic_catalog::{Category, Money};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn product(id: &str, name: &str, category: Category, featured: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category,
            description: format!("{name} for everyday luck."),
            price: Money::new(2500),
            image_url: format!("https://img.test/{id}.jpg"),
            featured,
            spiritual_benefits: vec!["Luck".to_string()],
            materials: Vec::new(),
            origin: None,
            in_stock: true,
            created_at: None,
        }
    }

    fn amethyst() -> Product {
        product("a1", "Amethyst Cluster", Category::Crystals, true)
    }

    fn silver_ring() -> Product {
        product("r1", "Silver Ring", Category::SpiritualJewelry, false)
    }

    fn loaded(products: Vec<Product>) -> Storefront {
        let mut store = Storefront::new();
        let ticket = store.begin_load();
        store.finish_load(ticket, Ok(products));
        store
    }

    fn catalog_ids(store: &Storefront) -> Vec<String> {
        store
            .catalog_view()
            .cards
            .into_iter()
            .map(|c| c.id.into_inner())
            .collect()
    }

    fn home_ids(store: &Storefront) -> Vec<String> {
        store
            .home_view()
            .featured
            .into_iter()
            .map(|c| c.id.into_inner())
            .collect()
    }

    /// A source that answers from memory.
    struct StaticSource(RefCell<Option<Result<Vec<Product>, FetchError>>>);

    impl StaticSource {
        fn ok(products: Vec<Product>) -> Self {
            Self(RefCell::new(Some(Ok(products))))
        }

        fn failing(error: FetchError) -> Self {
            Self(RefCell::new(Some(Err(error))))
        }
    }

    #[async_trait(?Send)]
    impl ProductSource for StaticSource {
        async fn load_products(&self) -> Result<Vec<Product>, FetchError> {
            self.0
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(FetchError::Request("already loaded".to_string())))
        }
    }

    // === Initial state ===

    #[test]
    fn test_initial_state() {
        let store = Storefront::new();

        assert!(store.is_loading());
        assert_eq!(store.page(), Page::Home);
        assert_eq!(store.search_term(), "");
        assert!(store.products().is_empty());
        assert!(!store.is_detail_open());
        assert_eq!(store.catalog_category(), None);
        assert_eq!(store.page_view(), PageView::Loading);
    }

    // === Scenario A: both products visible, home shows featured only ===

    #[test]
    fn test_catalog_all_and_home_featured() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);

        assert_eq!(home_ids(&store), ["a1"]);

        store.navigate(Page::Catalog);
        assert_eq!(catalog_ids(&store), ["a1", "r1"]);
        assert_eq!(store.catalog_view().count_line(), "Showing 2 products");
    }

    // === Scenario B: case-insensitive search ===

    #[test]
    fn test_search_is_case_insensitive() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);
        store.navigate(Page::Catalog);

        store.set_search_term("silver");
        assert_eq!(catalog_ids(&store), ["r1"]);

        store.set_search_term("SILVER");
        assert_eq!(catalog_ids(&store), ["r1"]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);
        store.navigate(Page::Catalog);

        store.set_search_term("EVERYDAY");
        assert_eq!(catalog_ids(&store), ["a1", "r1"]);
    }

    // === Scenario C: empty category result ===

    #[test]
    fn test_empty_category_shows_empty_state_home_unaffected() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);
        store.navigate(Page::Catalog);

        assert!(store.select_category(CategoryFilter::Only(Category::Amulets)));
        let view = store.catalog_view();
        assert!(view.cards.is_empty());
        assert!(view.empty_state.is_some());

        store.set_search_term("silver");
        assert_eq!(home_ids(&store), ["a1"]);
    }

    // === Scenario D: fetch failure ===

    #[test]
    fn test_failed_load_leaves_empty_navigable_app() {
        let mut store = Storefront::new();
        let ticket = store.begin_load();
        assert!(store.is_loading());

        let outcome = store.finish_load(ticket, Err(FetchError::Timeout));

        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(!store.is_loading());
        assert!(store.products().is_empty());

        store.navigate(Page::Catalog);
        assert!(store.catalog_view().empty_state.is_some());
        store.navigate(Page::Categories);
        store.go_home();
        assert_eq!(store.page(), Page::Home);

        assert!(!store.select_product(&ProductId::new("a1")));
        assert!(!store.is_detail_open());
    }

    #[test]
    fn test_failed_reload_keeps_previous_list() {
        let mut store = loaded(vec![amethyst()]);

        let ticket = store.begin_load();
        store.finish_load(ticket, Err(FetchError::Request("offline".to_string())));

        assert_eq!(store.products().len(), 1);
        assert!(!store.is_loading());
    }

    // === Scenario E: overlay dismissal ===

    #[test]
    fn test_overlay_background_closes_panel_does_not() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);

        assert!(store.select_product(&ProductId::new("a1")));
        assert_eq!(store.page(), Page::Home);
        assert_eq!(store.detail_view().map(|d| d.name), Some("Amethyst Cluster".to_string()));

        assert!(!store.handle_overlay_click(OverlayClick::Panel));
        assert!(store.is_detail_open());

        assert!(store.handle_overlay_click(OverlayClick::Background));
        assert!(!store.is_detail_open());
    }

    #[test]
    fn test_close_button_closes() {
        let mut store = loaded(vec![silver_ring()]);
        store.navigate(Page::Catalog);
        store.select_product(&ProductId::new("r1"));

        assert!(store.handle_overlay_click(OverlayClick::CloseButton));
        assert_eq!(store.detail_view(), None);
        assert!(!store.handle_overlay_click(OverlayClick::CloseButton));
    }

    #[test]
    fn test_selection_survives_navigation() {
        let mut store = loaded(vec![amethyst()]);
        store.select_product(&ProductId::new("a1"));

        store.navigate(Page::Categories);
        assert!(store.is_detail_open());
    }

    // === Scenario F: Categories aliases Catalog ===

    #[test]
    fn test_categories_renders_like_catalog() {
        let mut catalog = loaded(vec![amethyst(), silver_ring()]);
        let mut categories = catalog.clone();
        catalog.navigate(Page::Catalog);
        categories.navigate(Page::Categories);

        catalog.set_search_term("ring");
        categories.set_search_term("ring");

        assert_eq!(catalog.page_view(), categories.page_view());
    }

    // === Catalog-local category ===

    #[test]
    fn test_category_resets_when_catalog_remounts() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);
        store.navigate(Page::Catalog);
        store.select_category(CategoryFilter::Only(Category::Crystals));

        store.go_home();
        assert_eq!(store.catalog_category(), None);

        store.navigate(Page::Categories);
        assert_eq!(store.catalog_category(), Some(CategoryFilter::All));
    }

    #[test]
    fn test_category_kept_between_catalog_and_categories() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);
        store.navigate(Page::Catalog);
        store.select_category(CategoryFilter::Only(Category::Crystals));

        store.navigate(Page::Categories);
        assert_eq!(
            store.catalog_category(),
            Some(CategoryFilter::Only(Category::Crystals))
        );
        assert_eq!(catalog_ids(&store), ["a1"]);
    }

    #[test]
    fn test_select_category_refused_on_home() {
        let mut store = loaded(vec![amethyst()]);
        assert!(!store.select_category(CategoryFilter::Only(Category::Amulets)));
        assert_eq!(store.catalog_category(), None);
    }

    #[test]
    fn test_search_term_is_shared_across_pages() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);
        store.set_search_term("ring");
        store.navigate(Page::Catalog);

        assert_eq!(store.search_term(), "ring");
        assert_eq!(catalog_ids(&store), ["r1"]);
    }

    #[test]
    fn test_nav_entries_follow_page() {
        let mut store = loaded(Vec::new());
        store.navigate(Page::Categories);

        let active: Vec<_> = store
            .nav_entries()
            .into_iter()
            .filter(|e| e.active)
            .map(|e| e.label)
            .collect();
        assert_eq!(active, ["Categories"]);
    }

    // === Load lifecycle ===

    #[test]
    fn test_result_after_shutdown_is_discarded() {
        let mut store = Storefront::new();
        let ticket = store.begin_load();

        store.shutdown();
        let outcome = store.finish_load(ticket, Ok(vec![amethyst()]));

        assert_eq!(outcome, LoadOutcome::Discarded);
        assert!(store.products().is_empty());
        assert!(store.is_loading());
    }

    #[test]
    fn test_external_lifeline_cancel_discards() {
        let mut store = Storefront::new();
        let lifeline = store.lifeline();
        let ticket = store.begin_load();

        lifeline.cancel();

        assert!(!ticket.is_live());
        assert_eq!(store.finish_load(ticket, Ok(vec![amethyst()])), LoadOutcome::Discarded);
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let mut store = Storefront::new();
        let first = store.begin_load();
        let second = store.begin_load();
        assert!(second.generation() > first.generation());

        assert_eq!(
            store.finish_load(first, Ok(vec![amethyst()])),
            LoadOutcome::Discarded
        );
        assert_eq!(
            store.finish_load(second, Ok(vec![silver_ring()])),
            LoadOutcome::Loaded { count: 1 }
        );
        assert_eq!(store.products()[0].id, ProductId::new("r1"));
    }

    #[test]
    fn test_clone_has_its_own_lifeline() {
        let mut original = Storefront::new();
        let ticket = original.begin_load();

        let copy = original.clone();
        copy.shutdown();

        assert!(ticket.is_live());
        assert_eq!(
            original.finish_load(ticket, Ok(vec![amethyst()])),
            LoadOutcome::Loaded { count: 1 }
        );
    }

    #[test]
    fn test_ticket_from_another_state_is_discarded() {
        let mut original = Storefront::new();
        let ticket = original.begin_load();
        let mut copy = original.clone();

        // Same generation, different owner.
        assert_eq!(
            copy.finish_load(ticket, Ok(vec![amethyst()])),
            LoadOutcome::Discarded
        );
        assert!(copy.products().is_empty());
        assert!(copy.is_loading());
    }

    #[test]
    fn test_reload_drops_selection_of_vanished_product() {
        let mut store = loaded(vec![amethyst(), silver_ring()]);
        store.select_product(&ProductId::new("r1"));

        let ticket = store.begin_load();
        store.finish_load(ticket, Ok(vec![amethyst()]));

        assert!(!store.is_detail_open());
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let mut store = Storefront::new();
        let source = StaticSource::ok(vec![amethyst(), silver_ring()]);

        let outcome = store.load(&source).await;

        assert_eq!(outcome, LoadOutcome::Loaded { count: 2 });
        assert!(!store.is_loading());
        assert!(matches!(store.page_view(), PageView::Home(_)));
    }

    #[tokio::test]
    async fn test_load_failure_from_source() {
        let mut store = Storefront::new();
        let source = StaticSource::failing(FetchError::HttpError {
            status: 500,
            message: "boom".to_string(),
        });

        assert_eq!(store.load(&source).await, LoadOutcome::Failed);
        assert!(store.products().is_empty());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_load_through_trait_object() {
        let mut store = Storefront::new();
        let source: Box<dyn ProductSource> = Box::new(StaticSource::ok(vec![amethyst()]));

        assert_eq!(store.load(source.as_ref()).await, LoadOutcome::Loaded { count: 1 });
    }
}
