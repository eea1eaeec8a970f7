// crates/travelreco-core/src/error.rs
use thiserror::Error;

/// Errors raised while obtaining a catalog.
///
/// Searching itself never fails; only the loader returns these.
#[derive(Debug, Error)]
pub enum TravelError {
    /// The catalog source could not be reached or did not answer.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TravelError>;
