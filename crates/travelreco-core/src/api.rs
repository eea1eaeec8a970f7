// crates/travelreco-core/src/api.rs

//! Display-ready views of search results.
//!
//! The core hands back plain [`MatchResult`]s; front ends that want the
//! familiar result card (title, country label, blurb, thumbnail, "Visit"
//! link) can map them through [`ResultCard`] instead of repeating the
//! fallbacks.

use crate::model::MatchResult;
use serde::Serialize;

/// Shown when a search finds nothing.
pub const EMPTY_STATE_MESSAGE: &str = "No results. Try “beach”, “temple”, or a country/city.";

const UNKNOWN_TITLE: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description available.";
const VISIT_BASE_URL: &str = "https://www.google.com/search?q=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub visit_url: String,
}

impl From<&MatchResult> for ResultCard {
    fn from(hit: &MatchResult) -> Self {
        let title = non_empty(hit.name()).unwrap_or(UNKNOWN_TITLE).to_owned();
        let visit_url = format!("{VISIT_BASE_URL}{}", urlencoding::encode(&title));
        ResultCard {
            country: non_empty(hit.country()).map(str::to_owned),
            description: non_empty(hit.city.description())
                .unwrap_or(NO_DESCRIPTION)
                .to_owned(),
            image: hit.city.image().map(str::to_owned),
            title,
            visit_url,
        }
    }
}

impl ResultCard {
    /// `"Kyoto (Japan)"`, or just the title when the country is unknown.
    pub fn heading(&self) -> String {
        match &self.country {
            Some(country) => format!("{} ({country})", self.title),
            None => self.title.clone(),
        }
    }
}

/// Cards for a whole result list, in order.
pub fn cards(results: &[MatchResult]) -> Vec<ResultCard> {
    results.iter().map(ResultCard::from).collect()
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
