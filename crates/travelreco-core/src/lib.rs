// crates/travelreco-core/src/lib.rs

//! # travelreco-core
//!
//! Keyword search over a small, static travel catalog of countries and their
//! cities.
//!
//! A keyword is first classified ([`Intent`]): `"beach"`/`"temple"` (in any
//! case, singular or plural) select a fixed category matched through a
//! synonym list, anything else is a free-text substring query. The catalog
//! is scanned in order and every matching city comes back as a
//! [`MatchResult`] carrying its country name.
//!
//! ```rust
//! use serde_json::json;
//! use travelreco_core::prelude::*;
//!
//! let catalog = Catalog::from_value(json!({
//!     "countries": [
//!         {"name": "Thailand", "cities": [
//!             {"name": "Phuket", "tags": ["beach"]},
//!             {"name": "Bangkok", "description": "Home to many temples"}
//!         ]}
//!     ]
//! }));
//!
//! let hits = catalog.search("Temple");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name(), "Bangkok");
//! assert_eq!(hits[0].country, "Thailand");
//! ```

pub mod api;
pub mod common;
pub mod error;
pub mod intent;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod prelude;
#[doc(hidden)]
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::api::{ResultCard, EMPTY_STATE_MESSAGE};
pub use crate::common::CatalogStats;
pub use crate::error::{Result, TravelError};
pub use crate::intent::{classify, Category, Intent};
pub use crate::model::{list_countries, Catalog, City, Country, MatchResult};
pub use crate::search::{present, search, MIN_PRESENTED};
pub use crate::traits::CatalogSearch;
