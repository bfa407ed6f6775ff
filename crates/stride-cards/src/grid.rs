//! Catalog grid renderer.

use chrono::{DateTime, Utc};
use stride_catalog::ShoeListing;

use crate::card::render_shoe_card;

/// Render the catalog grid section.
pub fn render_shoe_grid(listings: &[ShoeListing], now: DateTime<Utc>) -> String {
    let cards: String = listings
        .iter()
        .map(|listing| render_shoe_card(listing, now))
        .collect();

    format!(
        r#"<section class="shoe-grid" data-section="catalog">
    {}
</section>"#,
        cards
    )
}

/// Render skeleton placeholders while catalog data loads.
pub fn render_shoe_grid_skeleton(count: usize) -> String {
    let cards: String = (0..count)
        .map(|_| {
            r#"<div class="shoe-card skeleton">
        <div class="skeleton-image"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text short"></div>
    </div>"#
        })
        .collect();

    format!(
        r#"<section class="shoe-grid skeleton" data-section="catalog">
    {}
</section>"#,
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_catalog::{Currency, Money};

    #[test]
    fn test_grid_renders_every_listing() {
        let listings = vec![
            ShoeListing::new("a", "A", "/a.jpg", Money::new(1000, Currency::USD)),
            ShoeListing::new("b", "B", "/b.jpg", Money::new(2000, Currency::USD)),
        ];
        let html = render_shoe_grid(&listings, "2024-06-15T12:00:00Z".parse().unwrap());
        assert!(html.contains(r#"href="/shoe/a""#));
        assert!(html.contains(r#"href="/shoe/b""#));
        assert!(html.contains(r#"data-section="catalog""#));
    }

    #[test]
    fn test_empty_grid_still_renders_section() {
        let html = render_shoe_grid(&[], "2024-06-15T12:00:00Z".parse().unwrap());
        assert!(html.contains(r#"<section class="shoe-grid""#));
        assert!(!html.contains("shoe-card-link"));
    }

    #[test]
    fn test_skeleton_count() {
        let html = render_shoe_grid_skeleton(4);
        assert_eq!(html.matches("shoe-card skeleton").count(), 4);
    }
}
