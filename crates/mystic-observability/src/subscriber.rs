//! Global subscriber installation.

use crate::LogConfig;

/// Install the global subscriber for `config`.
///
/// Returns `true` if this call installed it. Later calls, or calls after
/// another subscriber was set, leave the existing one in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(config: &LogConfig) -> bool {
    use crate::LogFormat;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Human => builder.try_init().is_ok(),
    };

    if installed {
        tracing::debug!(level = %config.level, format = ?config.format, "logging initialized");
    }
    installed
}

/// Install the global subscriber for `config`.
///
/// Events go to the browser console. Returns `true` if this call installed it.
#[cfg(target_arch = "wasm32")]
pub fn init(config: &LogConfig) -> bool {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

    let wasm_config = WASMLayerConfigBuilder::new()
        .set_max_level(config.level.as_tracing())
        .set_report_logs_in_timings(false)
        .build();

    tracing_subscriber::registry()
        .with(WASMLayer::new(wasm_config))
        .try_init()
        .is_ok()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init(&LogConfig::development());
        assert!(!init(&LogConfig::production()));
    }
}
