// crates/travelreco-core/src/traits.rs
use crate::common::CatalogStats;
use crate::intent::Intent;
use crate::model::{Catalog, MatchResult};

/// Read-only query surface over a loaded catalog.
///
/// Implemented for [`Catalog`]; callers hold the catalog and pass it around
/// by reference, nothing here touches global state.
pub trait CatalogSearch {
    fn stats(&self) -> CatalogStats;

    /// Keyword search; see [`crate::search::search`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use travelreco_core::{Catalog, CatalogSearch};
    ///
    /// let catalog = Catalog::bundled().unwrap();
    /// for hit in catalog.search("beaches") {
    ///     println!("- {} ({})", hit.name(), hit.country);
    /// }
    /// ```
    fn search(&self, keyword: &str) -> Vec<MatchResult>;

    /// How `keyword` would be interpreted by [`CatalogSearch::search`].
    fn intent(&self, keyword: &str) -> Intent {
        Intent::classify(keyword)
    }
}

impl CatalogSearch for Catalog {
    fn stats(&self) -> CatalogStats {
        let countries = self.countries();
        CatalogStats {
            countries: countries.len(),
            cities: countries.iter().map(|c| c.cities().len()).sum(),
        }
    }

    fn search(&self, keyword: &str) -> Vec<MatchResult> {
        crate::search::search(Some(self), Some(keyword))
    }
}
