//! End-to-end rendering scenarios for the shoe card.

use chrono::{DateTime, Duration, Utc};
use stride_cards::{render_catalog_page, render_shoe_card, render_shoe_grid_skeleton};
use stride_catalog::prelude::*;

fn now() -> DateTime<Utc> {
    "2024-06-15T12:00:00Z".parse().unwrap()
}

fn base_listing(price_cents: i64) -> ShoeListing {
    ShoeListing::new(
        "velocity-lace-up",
        "Velocity Lace-Up",
        "/img/velocity.jpg",
        Money::new(price_cents, Currency::USD),
    )
}

#[test]
fn sale_price_wins_over_old_release_date() {
    let shoe = base_listing(15000)
        .with_sale_price(Money::new(11000, Currency::USD))
        .with_release_date("2019-01-01T00:00:00Z".parse().unwrap());

    assert_eq!(shoe.variant(now()), ListingVariant::OnSale);

    let html = render_shoe_card(&shoe, now());
    assert!(html.contains(">Sale</span>"));
    assert!(html.contains("$150.00"));
    assert!(html.contains("$110.00"));
    assert!(html.contains("shoe-price--struck"));
    assert!(html.contains(r#"data-variant="on-sale""#));
}

#[test]
fn release_today_shows_just_released() {
    let shoe = base_listing(20000).with_release_date(now() - Duration::hours(6));

    assert_eq!(shoe.variant(now()), ListingVariant::NewRelease);

    let html = render_shoe_card(&shoe, now());
    assert!(html.contains(">Just released!</span>"));
    assert!(html.contains("shoe-flag--new-release"));
    assert!(html.contains("$200.00"));
    assert!(!html.contains("shoe-sale-price"));
    assert!(!html.contains("shoe-price--struck"));
}

#[test]
fn old_release_renders_plain_card() {
    let shoe = base_listing(8000).with_release_date("2000-01-01T00:00:00Z".parse().unwrap());

    assert_eq!(shoe.variant(now()), ListingVariant::Default);

    let html = render_shoe_card(&shoe, now());
    assert!(!html.contains("shoe-flag--"));
    assert!(!html.contains(">Sale</span>"));
    assert!(!html.contains(">Just released!</span>"));
    assert!(html.contains("$80.00"));
}

#[test]
fn zero_sale_price_beats_recency() {
    let shoe = base_listing(15000)
        .with_sale_price(Money::zero(Currency::USD))
        .with_release_date(now() - Duration::hours(1));

    assert_eq!(shoe.variant(now()), ListingVariant::OnSale);

    let html = render_shoe_card(&shoe, now());
    assert!(html.contains(">Sale</span>"));
    assert!(html.contains(r#"<span class="shoe-sale-price">$0.00</span>"#));
}

#[test]
fn color_label_matches_count() {
    let one = render_shoe_card(&base_listing(15000).with_colors(1), now());
    assert!(one.contains(">1 Color</span>"));

    let three = render_shoe_card(&base_listing(15000).with_colors(3), now());
    assert!(three.contains(">3 Colors</span>"));
}

#[test]
fn badge_absent_only_for_default_variant() {
    let on_sale = base_listing(15000).with_sale_price(Money::new(11000, Currency::USD));
    let fresh = base_listing(15000).with_release_date(now() - Duration::days(3));
    let plain = base_listing(15000);

    assert!(render_shoe_card(&on_sale, now()).contains("shoe-flag"));
    assert!(render_shoe_card(&fresh, now()).contains("shoe-flag"));
    assert!(!render_shoe_card(&plain, now()).contains("shoe-flag"));
}

#[test]
fn sale_element_present_only_with_sale_price() {
    let on_sale = base_listing(15000).with_sale_price(Money::new(11000, Currency::USD));
    assert!(render_shoe_card(&on_sale, now()).contains("shoe-sale-price"));
    assert!(!render_shoe_card(&base_listing(15000), now()).contains("shoe-sale-price"));
}

#[test]
fn full_page_renders_grid_with_styles() {
    let listings = vec![
        base_listing(15000).with_sale_price(Money::new(11000, Currency::USD)),
        ShoeListing::new(
            "trail-mid",
            "Trail Mid",
            "/img/trail.jpg",
            Money::new(12900, Currency::USD),
        ),
    ];

    let html = render_catalog_page("Stride Shoes", &listings, now());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Stride Shoes</title>"));
    assert!(html.contains(".shoe-flag--on-sale"));
    assert!(html.contains(r#"href="/shoe/velocity-lace-up""#));
    assert!(html.contains(r#"href="/shoe/trail-mid""#));
}

#[test]
fn skeleton_matches_requested_cards() {
    let html = render_shoe_grid_skeleton(6);
    assert_eq!(html.matches("skeleton-image").count(), 6);
}
