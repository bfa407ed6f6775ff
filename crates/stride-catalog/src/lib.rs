//! Shoe catalog domain types for the Stride storefront.
//!
//! This crate provides the data model behind the storefront's listing grid:
//!
//! - **Listings**: Shoe listings and the validated catalog that holds them
//! - **Variants**: On-sale / new-release / default display mode selection
//! - **Money**: Cents-based prices with currency-aware formatting
//! - **Text**: Small label helpers such as count pluralization
//!
//! # Example
//!
//! ```rust
//! use stride_catalog::prelude::*;
//! use chrono::Utc;
//!
//! let shoe = ShoeListing::new(
//!     "velocity-lace-up",
//!     "Velocity Lace-Up",
//!     "/img/velocity.jpg",
//!     Money::new(14900, Currency::USD),
//! )
//! .with_sale_price(Money::new(10900, Currency::USD))
//! .with_colors(4);
//!
//! assert_eq!(shoe.variant(Utc::now()), ListingVariant::OnSale);
//! assert_eq!(shoe.color_label(), "4 Colors");
//! assert_eq!(shoe.detail_href(), "/shoe/velocity-lace-up");
//! ```

pub mod error;
pub mod listing;
pub mod money;
pub mod text;
pub mod variant;

pub use error::CatalogError;
pub use listing::{Catalog, ShoeListing};
pub use money::{Currency, Money};
pub use variant::{ListingVariant, NEW_RELEASE_WINDOW_DAYS};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::listing::{parse_release_date, Catalog, ShoeListing};
    pub use crate::money::{Currency, Money};
    pub use crate::text::pluralize;
    pub use crate::variant::{is_new_release, ListingVariant, NEW_RELEASE_WINDOW_DAYS};
}
