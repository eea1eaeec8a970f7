use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a catalog.
///
/// Returned by [`CatalogSearch::stats`](crate::traits::CatalogSearch::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub cities: usize,
}
