//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use mystic_core::{LoadOutcome, Storefront, LOADING_MESSAGE};
use mystic_data::{DataConfig, HttpProductSource, DEFAULT_BACKEND_URL};
use mystic_observability::{LogConfig, LogLevel};

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// `--backend-url`, if given.
    backend_url: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        backend_url: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            backend_url,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["mystic.toml", ".mystic.toml", "mystic.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path: PathBuf = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Logging settings, raised to debug by `--verbose`.
    pub fn log_config(&self, verbose: bool) -> LogConfig {
        if verbose {
            self.config.log.clone().with_level(LogLevel::Debug)
        } else {
            self.config.log.clone()
        }
    }

    /// Backend settings for the product fetch.
    pub fn data_config(&self) -> DataConfig {
        let env_url = DataConfig::from_env().map(|c| c.base_url);
        let base_url = resolve_backend_url(
            self.backend_url.as_deref(),
            env_url.as_deref(),
            self.config.backend.url.as_deref(),
        );
        DataConfig::new(base_url).with_timeout(self.config.backend.timeout())
    }

    /// Fetch the listing once and return the loaded state.
    ///
    /// A failed fetch is reported as a warning and yields an empty catalog.
    pub async fn load_storefront(&self) -> Result<Storefront> {
        let data_config = self.data_config();
        let url = data_config.products_url();
        self.output.debug(&format!("Fetching {}", url));

        let source = HttpProductSource::new(data_config)?;
        let spinner = self.output.spinner(LOADING_MESSAGE);

        let mut store = Storefront::new();
        let outcome = store.load(&source).await;
        spinner.finish_and_clear();

        match outcome {
            LoadOutcome::Loaded { count } => {
                self.output.debug(&format!("Loaded {} product(s)", count));
            }
            LoadOutcome::Failed => {
                self.output.warn(&format!(
                    "Could not load products from {}; showing an empty catalog",
                    url
                ));
            }
            LoadOutcome::Discarded => {}
        }

        Ok(store)
    }
}

/// Pick the backend base URL: flag, then environment, then config file,
/// then the default. Blank values are skipped.
fn resolve_backend_url(flag: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [flag, env, file]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .to_string()
}
