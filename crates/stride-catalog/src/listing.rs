//! Shoe listings and the validated catalog that holds them.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;
use crate::money::Money;
use crate::text::pluralize;
use crate::variant::ListingVariant;

/// A single shoe as it appears in the storefront catalog.
///
/// Listings arrive as JSON. Only `slug`, `name`, `image_src` and `price`
/// are required; the rest default to an unremarkable listing with one
/// colorway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoeListing {
    /// URL-safe identifier, unique within a catalog.
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: Money,
    #[serde(default)]
    pub sale_price: Option<Money>,
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default = "default_num_of_colors")]
    pub num_of_colors: u32,
}

fn default_num_of_colors() -> u32 {
    1
}

/// Parse a release date from either an RFC 3339 timestamp or a bare
/// `YYYY-MM-DD` date, which is taken as midnight UTC.
pub fn parse_release_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Some(dt);
    }
    let date = s.parse::<NaiveDate>().ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

// Lenient on purpose: an unreadable date downgrades the listing to
// not-new rather than rejecting the whole catalog. Feeds disagree on
// the field's shape, so non-string values are dropped the same way.
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(parse_release_date))
}

impl ShoeListing {
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date: None,
            num_of_colors: 1,
        }
    }

    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn with_colors(mut self, num_of_colors: u32) -> Self {
        self.num_of_colors = num_of_colors;
        self
    }

    /// Resolve the display variant of this listing as of `now`.
    pub fn variant(&self, now: DateTime<Utc>) -> ListingVariant {
        ListingVariant::select(self.sale_price, self.release_date, now)
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Path of the listing's detail page.
    pub fn detail_href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Human label for the colorway count, e.g. "1 Color" or "4 Colors".
    pub fn color_label(&self) -> String {
        pluralize("Color", self.num_of_colors)
    }
}

/// A validated collection of listings.
///
/// Construction checks that every listing has a slug and that slugs are
/// unique, so downstream rendering can key on them without re-checking.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub listings: Vec<ShoeListing>,
}

impl Catalog {
    pub fn new(listings: Vec<ShoeListing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, listing) in listings.iter().enumerate() {
            if listing.slug.is_empty() {
                return Err(CatalogError::MissingSlug { index });
            }
            if !seen.insert(listing.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(listing.slug.clone()));
            }
        }
        Ok(Self { listings })
    }

    /// Parse a catalog from a JSON array of listings and validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let listings: Vec<ShoeListing> = serde_json::from_str(json)?;
        Self::new(listings)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoeListing> {
        self.listings.iter()
    }
}
