//! Build errors for the wizard builder.

use crate::catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur when building a wizard.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid wizard configuration: {0}")]
    Config(#[from] serde_json::Error),
}
