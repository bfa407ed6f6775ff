//! Validate a catalog file.

use std::fs;

use anyhow::{Context as _, Result};
use stride_catalog::{Catalog, ListingVariant};

use super::{resolve_now, warn_unreadable_dates, ValidateArgs};
use crate::context::Context;

/// Run the validate command.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.catalog);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;
    warn_unreadable_dates(&json, ctx);

    let now = resolve_now(args.now.as_deref())?;

    if catalog.is_empty() {
        ctx.output.info("Catalog has no listings");
    }

    let mut on_sale = 0;
    let mut new_releases = 0;
    let mut default = 0;
    for listing in catalog.iter() {
        match listing.variant(now) {
            ListingVariant::OnSale => on_sale += 1,
            ListingVariant::NewRelease => new_releases += 1,
            ListingVariant::Default => default += 1,
        }
    }

    ctx.output
        .success(&format!("Catalog is valid: {}", path.display()));
    ctx.output.kv("Listings", &catalog.len().to_string());
    ctx.output.kv("On sale", &on_sale.to_string());
    ctx.output.kv("New releases", &new_releases.to_string());
    ctx.output.kv("Default", &default.to_string());

    Ok(())
}
