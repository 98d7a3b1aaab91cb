//! Application components and pages.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use mystic_core::{
    CatalogView, DetailView, HomeView, OverlayClick, PageView, ProductCard as CardView,
    Storefront, StorefrontConfig, CATALOG_SUBTITLE, CATALOG_TITLE, CATEGORY_PREVIEW_TITLE,
    FEATURED_TITLE, FILTER_TITLE, HERO_FEATURES, HERO_SUBTITLE, HERO_TITLE, LOADING_MESSAGE,
};
use mystic_data::{HttpProductSource, ProductSource};

/// The storefront state shared by every component.
type Store = RwSignal<Storefront>;

fn use_store() -> Store {
    expect_context::<Store>()
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StorefrontConfig::default().with_backend_url(crate::backend_url());

    let mut initial = Storefront::new();
    let ticket = initial.begin_load();
    let lifeline = initial.lifeline();
    let store: Store = RwSignal::new(initial);
    provide_context(store);

    // A result that arrives after unmount is dropped by `finish_load`.
    on_cleanup(move || lifeline.cancel());

    let data_config = config.data_config();
    spawn_local(async move {
        let result = match HttpProductSource::new(data_config) {
            Ok(source) => source.load_products().await,
            Err(error) => Err(error),
        };
        if !ticket.is_live() {
            tracing::debug!("storefront unmounted before products arrived");
            return;
        }
        if let Some(outcome) = store.try_update(|s| s.finish_load(ticket, result)) {
            tracing::debug!(?outcome, "initial product load finished");
        }
    });

    let loading = Memo::new(move |_| store.with(Storefront::is_loading));
    let StorefrontConfig {
        name,
        tagline,
        default_title,
        ..
    } = config;

    view! {
        <Title text=default_title/>
        <Meta name="description" content="Spiritual treasures, crystals and lucky charms"/>

        <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen/> }>
            <div class="App">
                <Header name=name.clone() tagline=tagline.clone()/>
                <main class="main-content">
                    <MainContent/>
                </main>
                <ProductDetail/>
                <Footer/>
            </div>
        </Show>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-content">
                <div class="loading-spinner">"🔮"</div>
                <p>{LOADING_MESSAGE}</p>
            </div>
        </div>
    }
}

/// Home, or the catalog for both Catalog and Categories.
#[component]
fn MainContent() -> impl IntoView {
    let store = use_store();
    let page = Memo::new(move |_| store.with(Storefront::page_view));

    move || match page.get() {
        PageView::Loading => view! { <LoadingScreen/> }.into_any(),
        PageView::Home(home) => view! { <HomePage home=home/> }.into_any(),
        PageView::Catalog(catalog) => view! { <CatalogPage catalog=catalog/> }.into_any(),
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(name: String, tagline: String) -> impl IntoView {
    let store = use_store();
    let nav = Memo::new(move |_| store.with(Storefront::nav_entries));
    let search = move || store.with(|s| s.search_term().to_string());

    view! {
        <header class="mystical-header">
            <div class="container mx-auto px-4 py-6">
                <nav class="flex items-center justify-between">
                    <div
                        class="logo-section cursor-pointer"
                        on:click=move |_| store.update(Storefront::go_home)
                    >
                        <h1 class="text-3xl font-bold text-white">"✨ " {name}</h1>
                        <p class="text-purple-200 text-sm">{tagline}</p>
                    </div>

                    <div class="nav-links">
                        {move || nav.get().into_iter().map(|entry| {
                            let class = if entry.active { "nav-button active" } else { "nav-button" };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| store.update(|s| s.navigate(entry.page))
                                >
                                    {entry.label}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="search-section">
                        <div class="relative">
                            <input
                                type="text"
                                placeholder="Search mystical items..."
                                class="search-input"
                                prop:value=search
                                on:input=move |ev| {
                                    let term = event_target_value(&ev);
                                    store.update(|s| s.set_search_term(term));
                                }
                            />
                            <span class="search-icon">"🔮"</span>
                        </div>
                    </div>
                </nav>
            </div>
        </header>
    }
}

const FOOTER_SHOP_LINKS: [&str; 6] = [
    "All Products",
    "🔮 Crystals & Gems",
    "✨ Spiritual Jewelry",
    "🧿 Protection Charms",
    "🌙 Healing Stones",
    "🌟 Featured Items",
];

const FOOTER_CARE_LINKS: [&str; 6] = [
    "Contact Us",
    "Shipping Info",
    "Return Policy",
    "Size Guide",
    "Care Instructions",
    "FAQ",
];

const FOOTER_POLICY_LINKS: [&str; 4] = [
    "Privacy Policy",
    "Terms of Service",
    "Cookie Policy",
    "Refund Policy",
];

fn footer_links(links: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="footer-links">
            {links.iter().map(|label| view! {
                <li><a href="#" class="footer-link">{*label}</a></li>
            }).collect_view()}
        </ul>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mystical-footer">
            <div class="container mx-auto px-4 py-12">
                <div class="footer-content">
                    <div class="footer-section">
                        <div class="footer-logo">
                            <h3 class="text-2xl font-bold text-white">"✨ MysticCharms"</h3>
                            <p class="text-purple-200 text-sm mb-4">"Spiritual Treasures & Lucky Charms"</p>
                        </div>
                        <p class="footer-description">
                            "Discover authentic spiritual treasures and mystical artifacts to bring positive energy, \
                             protection, and luck into your life."
                        </p>
                    </div>

                    <div class="footer-section">
                        <h4 class="footer-title">"Shop"</h4>
                        {footer_links(&FOOTER_SHOP_LINKS)}
                    </div>

                    <div class="footer-section">
                        <h4 class="footer-title">"Customer Care"</h4>
                        {footer_links(&FOOTER_CARE_LINKS)}
                    </div>

                    <div class="footer-section">
                        <h4 class="footer-title">"Contact & Legal"</h4>
                        <div class="contact-info">
                            <p class="contact-label">"Email"</p>
                            <a href="mailto:info@mysticcharms.com" class="contact-value">"info@mysticcharms.com"</a>
                            <p class="contact-label">"Phone"</p>
                            <a href="tel:+1-555-MYSTIC" class="contact-value">"+1 (555) MYSTIC"</a>
                            <p class="contact-label">"Address"</p>
                            <p class="contact-value">"123 Spiritual Way, Crystal City, CA 90210"</p>
                        </div>
                        <div class="policy-links">
                            {FOOTER_POLICY_LINKS.iter().map(|label| view! {
                                <a href="#" class="policy-link">{*label}</a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="newsletter-section">
                    <h4 class="newsletter-title">"🌟 Join Our Mystical Journey"</h4>
                    <div class="newsletter-form">
                        <input
                            type="email"
                            placeholder="Enter your email for spiritual updates..."
                            class="newsletter-input"
                        />
                        <button class="newsletter-button">"✨ Subscribe"</button>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="copyright">
                        "© 2025 MysticCharms. All rights reserved. | Spreading positive energy since 2020 ✨"
                    </p>
                </div>
            </div>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Hero, featured products and the category preview.
#[component]
fn HomePage(home: HomeView) -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero-section">
                <div class="container mx-auto px-4 py-16 text-center">
                    <h1 class="hero-title">{HERO_TITLE}</h1>
                    <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                    <div class="hero-features">
                        {HERO_FEATURES.into_iter().map(|(icon, label)| view! {
                            <div class="feature">
                                <span class="feature-icon">{icon}</span>
                                <span>{label}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="featured-section">
                <div class="container mx-auto px-4 py-12">
                    <h2 class="section-title">{FEATURED_TITLE}</h2>
                    <ProductGrid cards=home.featured/>
                </div>
            </section>

            <section class="categories-preview">
                <div class="container mx-auto px-4 py-12">
                    <h2 class="section-title">{CATEGORY_PREVIEW_TITLE}</h2>
                    <div class="categories-grid">
                        {home.categories.into_iter().map(|preview| {
                            let class = format!("category-card {}", preview.class);
                            view! {
                                <div class=class>
                                    <h3>{preview.title}</h3>
                                    <p>{preview.blurb}</p>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}

/// Category filter, result count and grid.
#[component]
fn CatalogPage(catalog: CatalogView) -> impl IntoView {
    let store = use_store();
    let count = catalog.count_line();
    let empty_state = catalog.empty_state;

    view! {
        <div class="catalog-page">
            <div class="container mx-auto px-4 py-8">
                <div class="catalog-header">
                    <h1 class="page-title">{CATALOG_TITLE}</h1>
                    <p class="page-subtitle">{CATALOG_SUBTITLE}</p>
                </div>

                <div class="filter-section">
                    <h3 class="filter-title">{FILTER_TITLE}</h3>
                    <div class="category-filters">
                        {catalog.filters.into_iter().map(|button| {
                            let filter = button.filter;
                            let class = if button.active { "filter-btn active" } else { "filter-btn" };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| store.update(|s| {
                                        s.select_category(filter);
                                    })
                                >
                                    {button.label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="products-section">
                    <div class="products-count">{count}</div>
                    <ProductGrid cards=catalog.cards/>
                    {empty_state.map(|state| view! {
                        <div class="no-products">
                            <p>{state.message}</p>
                            <p>{state.hint}</p>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductGrid(cards: Vec<CardView>) -> impl IntoView {
    view! {
        <div class="products-grid">
            {cards.into_iter().map(|card| view! { <ProductCard card=card/> }).collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(card: CardView) -> impl IntoView {
    let store = use_store();
    let id = card.id.clone();
    let alt = card.name.clone();

    view! {
        <div
            class="product-card"
            on:click=move |_| store.update(|s| {
                s.select_product(&id);
            })
        >
            <div class="product-image-container">
                <img src=card.image_url alt=alt class="product-image"/>
                {card.featured.then(|| view! { <span class="featured-badge">"✨ Featured"</span> })}
            </div>
            <div class="product-content">
                <h3 class="product-name">{card.name}</h3>
                <p class="product-category">{card.category}</p>
                <p class="product-description">{card.excerpt}</p>
                <div class="product-benefits">
                    {card.benefits.into_iter().map(|benefit| view! {
                        <span class="benefit-tag">{benefit}</span>
                    }).collect_view()}
                </div>
                <div class="product-footer">
                    <span class="product-price">{card.price}</span>
                    <button class="view-details-btn">"View Details"</button>
                </div>
            </div>
        </div>
    }
}

/// Overlay for the selected product, if any.
#[component]
fn ProductDetail() -> impl IntoView {
    let store = use_store();
    let detail = Memo::new(move |_| store.with(Storefront::detail_view));

    move || detail.get().map(|product| view! { <DetailPanel product=product/> })
}

#[component]
fn DetailPanel(product: DetailView) -> impl IntoView {
    let store = use_store();
    let click = move |target: OverlayClick| {
        store.update(|s| {
            s.handle_overlay_click(target);
        })
    };
    let alt = product.name.clone();

    let benefits = (!product.benefits.is_empty()).then(|| {
        view! {
            <div class="modal-benefits">
                <h4>"Spiritual Benefits"</h4>
                <div class="benefits-list">
                    {product.benefits.into_iter().map(|benefit| view! {
                        <span class="benefit-tag">{benefit}</span>
                    }).collect_view()}
                </div>
            </div>
        }
    });
    let materials = product.materials.map(|materials| {
        view! {
            <div class="modal-materials">
                <h4>"Materials"</h4>
                <p>{materials}</p>
            </div>
        }
    });
    let origin = product.origin.map(|origin| {
        view! {
            <div class="modal-origin">
                <h4>"Origin"</h4>
                <p>{origin}</p>
            </div>
        }
    });

    view! {
        <div class="modal-overlay" on:click=move |_| click(OverlayClick::Background)>
            <div
                class="product-modal"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    click(OverlayClick::Panel);
                }
            >
                <button
                    class="close-btn"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        click(OverlayClick::CloseButton);
                    }
                >
                    "×"
                </button>

                <div class="modal-content">
                    <div class="modal-image-section">
                        <img src=product.image_url alt=alt class="modal-image"/>
                    </div>

                    <div class="modal-details">
                        <h2 class="modal-title">{product.name}</h2>
                        <p class="modal-category">{product.category}</p>
                        <p class="modal-price">{product.price}</p>

                        <div class="modal-description">
                            <h4>"Description"</h4>
                            <p>{product.description}</p>
                        </div>

                        {benefits}
                        {materials}
                        {origin}

                        <div class="modal-actions">
                            <button class="add-to-wishlist-btn">"💜 Add to Wishlist"</button>
                            <button class="contact-seller-btn">"📧 Contact for Purchase"</button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
