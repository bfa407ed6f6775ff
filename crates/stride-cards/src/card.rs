//! Shoe card renderer.

use chrono::{DateTime, Utc};
use stride_catalog::{ListingVariant, ShoeListing};

use crate::html::{escape_html, spacer};

/// Gap between the image and the text rows, matching the card layout grid.
const IMAGE_TEXT_GAP_PX: u32 = 12;

/// Render one shoe listing as a clickable card.
///
/// The whole card links to the listing's detail page. `now` fixes the
/// instant used for variant selection, so output is reproducible.
pub fn render_shoe_card(listing: &ShoeListing, now: DateTime<Utc>) -> String {
    let variant = listing.variant(now);

    let price_class = if listing.is_on_sale() {
        "shoe-price shoe-price--struck"
    } else {
        "shoe-price"
    };

    let sale_price_html = match listing.sale_price {
        Some(sale) => format!(
            r#"<span class="shoe-sale-price">{}</span>"#,
            sale.display()
        ),
        None => String::new(),
    };

    format!(
        r#"<a href="{href}" class="shoe-card-link">
    <article class="shoe-card" data-variant="{variant}">
        <div class="shoe-image-wrapper">
            <img src="{image_src}" alt="{name}" class="shoe-image" loading="lazy">
        </div>
        {flag}{spacer}
        <div class="shoe-row">
            <h3 class="shoe-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="shoe-row">
            <span class="shoe-colors">{colors}</span>
            {sale_price}
        </div>
    </article>
</a>"#,
        href = escape_html(&listing.detail_href()),
        variant = variant.as_str(),
        image_src = escape_html(&listing.image_src),
        name = escape_html(&listing.name),
        flag = render_flag(variant),
        spacer = spacer(IMAGE_TEXT_GAP_PX),
        price_class = price_class,
        price = listing.price.display(),
        colors = escape_html(&listing.color_label()),
        sale_price = sale_price_html
    )
}

/// Render the corner flag; empty for the default variant.
fn render_flag(variant: ListingVariant) -> String {
    match variant.badge_label() {
        Some(label) => format!(
            r#"<span class="{}">{}</span>
        "#,
            flag_class(variant),
            label
        ),
        None => String::new(),
    }
}

// Classes are enumerated per variant rather than derived from strings,
// so an unmapped variant cannot produce a half-styled flag.
fn flag_class(variant: ListingVariant) -> &'static str {
    match variant {
        ListingVariant::OnSale => "shoe-flag shoe-flag--on-sale",
        ListingVariant::NewRelease => "shoe-flag shoe-flag--new-release",
        ListingVariant::Default => "shoe-flag",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_catalog::{Currency, Money};

    fn now() -> DateTime<Utc> {
        "2024-06-15T12:00:00Z".parse().unwrap()
    }

    fn listing() -> ShoeListing {
        ShoeListing::new(
            "velocity-lace-up",
            "Velocity Lace-Up",
            "/img/velocity.jpg",
            Money::new(14900, Currency::USD),
        )
    }

    #[test]
    fn test_card_links_to_detail_page() {
        let html = render_shoe_card(&listing(), now());
        assert!(html.contains(r#"href="/shoe/velocity-lace-up""#));
        assert!(html.contains(r#"data-variant="default""#));
    }

    #[test]
    fn test_card_escapes_name_and_image() {
        let mut shoe = listing();
        shoe.name = "Storm & Surge".to_string();
        shoe.image_src = "/img/storm\"surge.jpg".to_string();
        let html = render_shoe_card(&shoe, now());
        assert!(html.contains("Storm &amp; Surge"));
        assert!(html.contains("/img/storm&quot;surge.jpg"));
        assert!(!html.contains("Storm & Surge"));
    }

    #[test]
    fn test_flag_class_lookup() {
        assert_eq!(
            flag_class(ListingVariant::OnSale),
            "shoe-flag shoe-flag--on-sale"
        );
        assert_eq!(
            flag_class(ListingVariant::NewRelease),
            "shoe-flag shoe-flag--new-release"
        );
    }

    #[test]
    fn test_default_variant_renders_no_flag() {
        assert_eq!(render_flag(ListingVariant::Default), "");
    }

    #[test]
    fn test_image_text_spacing() {
        let html = render_shoe_card(&listing(), now());
        assert!(html.contains(r#"style="height: 12px;""#));
    }
}
