//! Stylesheet for the catalog page, inlined by the page shell.

/// CSS styles for the catalog grid and cards.
pub const CATALOG_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: #fff; color: hsl(220deg 3% 20%); }
main { max-width: 1200px; margin: 0 auto; padding: 2rem; }

/* Grid */
.shoe-grid { display: flex; flex-wrap: wrap; gap: 32px; }

/* Card */
.shoe-card-link { text-decoration: none; color: inherit; flex: 1 1 340px; }
.shoe-card { position: relative; }
.shoe-image-wrapper { position: relative; width: 100%; }
.shoe-image { width: 100%; display: block; border-radius: 16px 16px 4px 4px; }
.shoe-row { font-size: 1rem; display: flex; align-items: center; justify-content: space-between; margin: 0.25rem 0; }
.shoe-name { font-weight: 600; color: hsl(220deg 3% 20%); margin: 0; }
.shoe-price--struck { text-decoration: line-through; color: hsl(220deg 5% 40%); }
.shoe-colors { color: hsl(220deg 5% 40%); }
.shoe-sale-price { font-weight: 600; color: hsl(340deg 65% 47%); }

/* Flag */
.shoe-flag { position: absolute; right: -8px; top: 12px; padding: 8px 12px; color: white; font-size: 0.875rem; font-weight: 700; border-radius: 2px; }
.shoe-flag--on-sale { background: hsl(340deg 65% 47%); }
.shoe-flag--new-release { background: hsl(240deg 60% 63%); }

/* Loading State */
.shoe-grid.skeleton { opacity: 0.7; }
.shoe-card.skeleton { flex: 1 1 340px; }
.skeleton-image { width: 100%; aspect-ratio: 4 / 3; background: hsl(185deg 5% 95%); border-radius: 16px 16px 4px 4px; }
.skeleton-text { height: 1rem; margin-top: 12px; background: hsl(185deg 5% 95%); border-radius: 4px; }
.skeleton-text.short { width: 40%; }
"#;
