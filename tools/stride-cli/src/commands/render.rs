//! Render a catalog to a full HTML page.

use std::fs;

use anyhow::{Context as _, Result};
use stride_cards::render_catalog_page;
use stride_catalog::Catalog;

use super::{resolve_now, warn_unreadable_dates, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.catalog);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
    warn_unreadable_dates(&json, ctx);

    let now = resolve_now(args.now.as_deref())?;
    let title = args
        .title
        .unwrap_or_else(|| ctx.config.render.title.clone());

    ctx.output.debug(&format!(
        "Rendering {} listings as of {}",
        catalog.len(),
        now.to_rfc3339()
    ));

    let html = render_catalog_page(&title, &catalog.listings, now);

    match args.output.or_else(|| ctx.config.render.output.clone()) {
        Some(out) => {
            let out_path = ctx.resolve_path(&out);
            fs::write(&out_path, &html)
                .with_context(|| format!("Failed to write output file: {}", out_path.display()))?;
            ctx.output
                .success(&format!("Rendered catalog page: {}", out_path.display()));
            ctx.output.kv("Listings", &catalog.len().to_string());
            ctx.output.kv("Title", &title);
        }
        // Bare HTML on stdout so the page can be piped onward.
        None => print!("{}", html),
    }

    Ok(())
}
