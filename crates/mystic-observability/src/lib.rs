//! Tracing setup for the MysticCharms storefront.
//!
//! Everything in the workspace logs through the `tracing` macros; this crate
//! only decides where those events go:
//! - native binaries get a `tracing-subscriber` formatter (JSON or human),
//!   filtered by `RUST_LOG` when set
//! - the wasm32 storefront writes to the browser console via `tracing-wasm`
//!
//! ```rust,ignore
//! use mystic_observability::{init, LogConfig};
//!
//! init(&LogConfig::development());
//! tracing::info!("storefront starting");
//! ```

mod config;
mod subscriber;

pub use config::{LogConfig, LogFormat, LogLevel, ObservabilityError};
pub use subscriber::init;
