//! Home page featured selection.

use anyhow::Result;

use super::print_cards;
use crate::context::Context;

/// Run the featured command.
pub async fn run(ctx: &Context) -> Result<()> {
    let store = ctx.load_storefront().await?;
    let home = store.home_view();

    if ctx.output.is_json() {
        ctx.output.json(&home.featured);
        return Ok(());
    }

    ctx.output.header(mystic_core::FEATURED_TITLE);
    print_cards(&ctx.output, &home.featured);

    Ok(())
}
