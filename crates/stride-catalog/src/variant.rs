//! Display-variant selection for listings.
//!
//! Every listing renders in exactly one of three mutually exclusive
//! modes. A sale price always wins over recency, so a shoe that is both
//! discounted and newly released shows as on sale.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Days after release during which a listing still counts as a new release.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// The mutually exclusive display mode of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ListingVariant {
    /// A sale price is present (a zero amount still counts).
    OnSale,
    /// Released within the recency window.
    NewRelease,
    /// Neither on sale nor newly released.
    #[default]
    Default,
}

impl ListingVariant {
    /// Resolve the variant for a listing, in strict precedence order.
    ///
    /// Presence of `sale_price` is checked explicitly rather than by
    /// truthiness, so a zero sale price still selects `OnSale`.
    pub fn select(
        sale_price: Option<Money>,
        release_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        if sale_price.is_some() {
            ListingVariant::OnSale
        } else if is_new_release(release_date, now) {
            ListingVariant::NewRelease
        } else {
            ListingVariant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingVariant::OnSale => "on-sale",
            ListingVariant::NewRelease => "new-release",
            ListingVariant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-sale" => Some(ListingVariant::OnSale),
            "new-release" => Some(ListingVariant::NewRelease),
            "default" => Some(ListingVariant::Default),
            _ => None,
        }
    }

    /// Badge text for the variant; `None` exactly for `Default`.
    pub fn badge_label(&self) -> Option<&'static str> {
        match self {
            ListingVariant::OnSale => Some("Sale"),
            ListingVariant::NewRelease => Some("Just released!"),
            ListingVariant::Default => None,
        }
    }

    /// Check if this is the unbadged default mode.
    pub fn is_default(&self) -> bool {
        *self == ListingVariant::Default
    }
}

/// Check whether a release date falls within the recency window of `now`.
///
/// A missing date is never new. A future date is new: the comparison is
/// on the signed distance from release to `now`, so anything released
/// less than [`NEW_RELEASE_WINDOW_DAYS`] ago (or not yet) qualifies.
pub fn is_new_release(release_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match release_date {
        Some(released) => now - released < Duration::days(NEW_RELEASE_WINDOW_DAYS),
        None => false,
    }
}
