// crates/travelreco-core/src/loader/mod.rs

//! # Data Loader
//!
//! Turns a JSON source (string, reader, file, gzipped file or URL) into a
//! [`Catalog`]. This is the only part of the crate that can fail; once a
//! catalog exists every search over it is total.

use crate::error::Result;
use crate::model::Catalog;
use crate::traits::CatalogSearch;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod common_io;

#[cfg(feature = "fetch")]
mod fetch;

pub use common_io::is_gzip;

static BUNDLED_CATALOG: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "travel_recommendation_api.json"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// The dataset shipped with the crate, read once per process and shared.
    pub fn bundled() -> Result<&'static Catalog> {
        BUNDLED_CATALOG.get_or_try_init(|| Self::load_from_path(Self::default_dataset_path()))
    }

    /// Reads a catalog file. `*.gz` files are gunzipped (feature `compact`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let catalog = Self::from_reader(reader)?;
        log_loaded(&catalog, &path.display().to_string());
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses catalog JSON. Only malformed JSON is an error; a well-formed
    /// document of an unexpected shape yields [`Catalog::Unrecognized`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub(crate) fn log_loaded(catalog: &Catalog, source: &str) {
    if !catalog.is_recognized() {
        warn!(source, "catalog has neither a `countries` array nor a top-level array");
        return;
    }
    let stats = catalog.stats();
    info!(
        source,
        countries = stats.countries,
        cities = stats.cities,
        "catalog loaded"
    );
}
