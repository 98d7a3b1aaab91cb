//! Product detail.

use anyhow::{bail, Result};
use mystic_catalog::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.load_storefront().await?;

    let id = ProductId::new(args.id);
    if !store.select_product(&id) {
        bail!("Product '{}' not found", id);
    }
    let Some(detail) = store.detail_view() else {
        bail!("Product '{}' not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&detail);
        return Ok(());
    }

    ctx.output.header(&detail.name);
    ctx.output.kv("ID", detail.id.as_str());
    ctx.output.kv("Category", &detail.category);
    ctx.output.kv("Price", &detail.price);
    ctx.output.kv("Stock", &stock_badge(detail.in_stock));
    ctx.output.kv("Image", &detail.image_url);

    ctx.output.header("Description");
    ctx.output.line(&detail.description);

    if !detail.benefits.is_empty() {
        ctx.output.header("Spiritual Benefits");
        for benefit in &detail.benefits {
            ctx.output.list_item(benefit);
        }
    }

    if let Some(materials) = &detail.materials {
        ctx.output.header("Materials");
        ctx.output.line(materials);
    }

    if let Some(origin) = &detail.origin {
        ctx.output.header("Origin");
        ctx.output.line(origin);
    }

    Ok(())
}
