//! CLI command implementations.

pub mod categories;
pub mod featured;
pub mod products;
pub mod show;

use clap::Args;
use mystic_catalog::CategoryFilter;
use mystic_core::ProductCard;

use crate::output::Output;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Case-insensitive text matched against name and description.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category value (e.g. `crystals`), or `all`.
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

const CARD_WIDTHS: [usize; 4] = [26, 32, 20, 10];

/// Print product cards as a table.
pub(crate) fn print_cards(output: &Output, cards: &[ProductCard]) {
    output.table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &CARD_WIDTHS);
    output.line(&format!("  {}", "-".repeat(CARD_WIDTHS.iter().sum::<usize>() + 6)));

    for card in cards {
        let name = if card.featured {
            format!("✨ {}", card.name)
        } else {
            card.name.clone()
        };
        output.table_row(
            &[card.id.as_str(), &name, &card.category, &card.price],
            &CARD_WIDTHS,
        );
    }
}
