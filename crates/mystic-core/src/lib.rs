//! MysticCharms storefront core.
//!
//! Front-ends (the Leptos web app and the terminal browser) share this
//! crate. It owns:
//! - [`Storefront`]: the single view-state container, mutated only through
//!   named operations
//! - the load lifecycle ([`Lifeline`], [`LoadTicket`], [`LoadOutcome`])
//!   that keeps a late fetch result from landing after teardown
//! - view models ([`HomeView`], [`CatalogView`], [`DetailView`]) that the
//!   front-ends render verbatim
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mystic_core::prelude::*;
//!
//! let mut store = Storefront::new();
//! let source = HttpProductSource::new(DataConfig::default())?;
//! store.load(&source).await;
//!
//! store.navigate(Page::Catalog);
//! store.set_search_term("silver");
//! for card in store.catalog_view().cards {
//!     println!("{} {}", card.name, card.price);
//! }
//! ```

pub mod prelude;
mod config;
mod lifecycle;
mod page;
mod state;
mod view;

pub use config::*;
pub use lifecycle::*;
pub use page::*;
pub use state::*;
pub use view::*;
