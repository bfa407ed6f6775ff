//! Server-side HTML renderers for the Stride storefront catalog.
//!
//! Pure functions from [`stride_catalog`] values to HTML strings, one
//! renderer per visual section:
//!
//! - **Card**: a single listing with image, flag, name and prices
//! - **Grid**: the catalog grid, plus a loading skeleton
//! - **Page**: a document shell that inlines the catalog stylesheet
//!
//! Rendering takes the current instant as a parameter, so the same
//! inputs always produce the same markup.
//!
//! # Example
//!
//! ```rust
//! use stride_cards::render_shoe_card;
//! use stride_catalog::prelude::*;
//!
//! let shoe = ShoeListing::new(
//!     "velocity-lace-up",
//!     "Velocity Lace-Up",
//!     "/img/velocity.jpg",
//!     Money::new(14900, Currency::USD),
//! );
//! let now = "2024-06-15T12:00:00Z".parse().unwrap();
//!
//! let html = render_shoe_card(&shoe, now);
//! assert!(html.contains(r#"href="/shoe/velocity-lace-up""#));
//! ```

pub mod card;
pub mod grid;
mod html;
pub mod page;
pub mod style;

pub use card::render_shoe_card;
pub use grid::{render_shoe_grid, render_shoe_grid_skeleton};
pub use html::spacer;
pub use page::{render_catalog_page, PageShell};
pub use style::CATALOG_STYLES;
