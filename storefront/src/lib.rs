//! MysticCharms storefront
//!
//! Client-side catalog browser:
//! - one product fetch at startup, dropped if the app is torn down first
//! - Home, Catalog and Categories pages driven by `mystic_core::Storefront`
//! - a detail overlay that closes on a background click
//!
//! The backend base URL is baked in at build time from `MYSTIC_BACKEND_URL`;
//! when unset the page's own origin is used.

mod app;

pub use app::App;

/// Backend base URL for this build.
pub fn backend_url() -> String {
    match option_env!("MYSTIC_BACKEND_URL") {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default(),
    }
}
