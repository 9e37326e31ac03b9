//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or checking a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed
    #[error("Catalog could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// One of the option lists has no entries
    #[error("Catalog has no {list}")]
    Empty { list: &'static str },

    /// Two entries of a list share the same selection key
    #[error("Catalog {list} contain duplicate key '{key}'")]
    DuplicateKey { list: &'static str, key: String },

    /// A selection key is the empty string, which means "unselected"
    #[error("Catalog {list} contain an empty key")]
    EmptyKey { list: &'static str },
}
