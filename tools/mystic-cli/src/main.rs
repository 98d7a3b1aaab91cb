//! Mystic CLI - browse the MysticCharms catalog from a terminal.
//!
//! Commands:
//! - `mystic products` - Filtered catalog listing
//! - `mystic featured` - Home page featured selection
//! - `mystic show` - Full details for one product
//! - `mystic categories` - Category values and labels

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ProductsArgs, ShowArgs};

/// Mystic CLI - Browse MysticCharms spiritual treasures
#[derive(Parser)]
#[command(name = "mystic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Backend base URL (overrides MYSTIC_BACKEND_URL and the config file)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered
    Products(ProductsArgs),

    /// List featured products
    Featured,

    /// Show full details for a product
    Show(ShowArgs),

    /// List product categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.backend_url, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let log_config = ctx.log_config(cli.verbose);
    mystic_observability::init(&log_config);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Featured => commands::featured::run(&ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mystic_catalog::{Category, CategoryFilter};

    #[test]
    fn test_parse_products_with_filters() {
        let cli = Cli::try_parse_from([
            "mystic",
            "products",
            "--search",
            "silver",
            "--category",
            "spiritual_jewelry",
        ])
        .unwrap();

        match cli.command {
            Commands::Products(args) => {
                assert_eq!(args.search, "silver");
                assert_eq!(
                    args.category,
                    CategoryFilter::Only(Category::SpiritualJewelry)
                );
            }
            _ => panic!("expected products command"),
        }
    }

    #[test]
    fn test_products_defaults() {
        let cli = Cli::try_parse_from(["mystic", "products"]).unwrap();
        match cli.command {
            Commands::Products(args) => {
                assert_eq!(args.search, "");
                assert_eq!(args.category, CategoryFilter::All);
            }
            _ => panic!("expected products command"),
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["mystic", "products", "--category", "wands"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mystic",
            "show",
            "a1",
            "--json",
            "--backend-url",
            "http://shop.test",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.backend_url.as_deref(), Some("http://shop.test"));
        assert!(matches!(cli.command, Commands::Show(ref args) if args.id == "a1"));
    }
}
