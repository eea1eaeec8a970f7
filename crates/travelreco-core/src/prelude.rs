//! travelreco prelude: bring common types and traits into scope.

pub use super::api::{cards, ResultCard, EMPTY_STATE_MESSAGE};
pub use super::common::CatalogStats;
pub use super::error::{Result, TravelError};
pub use super::intent::{Category, Intent};
pub use super::matcher::{matches_category, matches_text};
pub use super::model::{list_countries, Catalog, City, Country, MatchResult};
pub use super::search::{present, search};
pub use super::text::{normalize, singularize};
pub use super::traits::CatalogSearch;
