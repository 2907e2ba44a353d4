// crates/countrydb-core/src/error.rs

use thiserror::Error;

/// Errors raised while provisioning a [`CountryDb`](crate::CountryDb).
///
/// Queries never return errors. A code or name that matches nothing is
/// reported as `None` (or an empty result list), so this type only shows up
/// on the dataset loading path.
#[derive(Debug, Error)]
pub enum CountryDbError {
    /// A dataset file could not be found or opened.
    #[error("{0}")]
    NotFound(String),

    /// A dataset did not parse as JSON of the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CountryDbError>;
