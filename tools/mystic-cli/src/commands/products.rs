//! Catalog listing.

use anyhow::Result;
use mystic_core::Page;

use super::{print_cards, ProductsArgs};
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.load_storefront().await?;

    store.navigate(Page::Catalog);
    store.set_search_term(args.search);
    store.select_category(args.category);
    let view = store.catalog_view();

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(mystic_core::CATALOG_TITLE);
    ctx.output.kv("Category", view.selected().label());
    if !store.search_term().is_empty() {
        ctx.output.kv("Search", store.search_term());
    }
    ctx.output.line("");

    if let Some(empty) = view.empty_state {
        ctx.output.info(empty.message);
        ctx.output.info(empty.hint);
        return Ok(());
    }

    print_cards(&ctx.output, &view.cards);
    ctx.output.line("");
    ctx.output.info(&view.count_line());

    Ok(())
}
