// crates/travelreco-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::{Result, TravelError};
use crate::model::Catalog;

impl Catalog {
    /// Downloads a catalog over HTTP(S).
    ///
    /// Transport failures and non-success statuses surface as
    /// [`TravelError::CatalogUnavailable`]; a body that is not JSON is a
    /// [`TravelError::Json`].
    pub fn fetch(url: &str) -> Result<Self> {
        let unavailable = |e: reqwest::Error| TravelError::CatalogUnavailable(format!("{url}: {e}"));

        let body = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(unavailable)?;

        let catalog = Self::from_json_str(&body)?;
        super::log_loaded(&catalog, url);
        Ok(catalog)
    }
}
