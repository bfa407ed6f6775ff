//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A listing has an empty slug.
    #[error("Listing at index {index} is missing a slug")]
    MissingSlug { index: usize },

    /// Two listings share the same slug, so detail links would collide.
    #[error("Duplicate listing slug: {0}")]
    DuplicateSlug(String),
}
