//! Category listing.

use anyhow::Result;
use mystic_catalog::CategoryFilter;
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct CategoryRow {
    value: &'static str,
    label: &'static str,
}

/// Run the categories command. Needs no backend.
pub async fn run(ctx: &Context) -> Result<()> {
    let rows: Vec<CategoryRow> = CategoryFilter::options()
        .map(|filter| CategoryRow {
            value: filter.as_str(),
            label: filter.label(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    ctx.output.table_row(&["VALUE", "LABEL"], &[20, 20]);
    for row in &rows {
        ctx.output.table_row(&[row.value, row.label], &[20, 20]);
    }

    Ok(())
}
