// crates/travelreco-core/src/search.rs
use crate::intent::Intent;
use crate::matcher::{matches_category, matches_text};
use crate::model::{list_countries, Catalog, MatchResult};
use tracing::debug;

/// Lower bound of the presentation slice. See [`present`].
pub const MIN_PRESENTED: usize = 2;

/// Runs a keyword search over the catalog.
///
/// An absent keyword is treated as empty (which matches every city). Results
/// keep catalog order, countries first then their cities; there is no
/// ranking.
///
/// ```rust
/// use serde_json::json;
/// use travelreco_core::{search, Catalog};
///
/// let catalog = Catalog::from_value(json!([
///     {"name": "Thailand", "cities": [{"name": "Phuket", "tags": ["beach"]}]}
/// ]));
/// let hits = search(Some(&catalog), Some("Beaches"));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].country, "Thailand");
/// ```
pub fn search(catalog: Option<&Catalog>, keyword: Option<&str>) -> Vec<MatchResult> {
    let keyword = keyword.unwrap_or("");
    let intent = Intent::classify(keyword);
    debug!(keyword, ?intent, "classified search keyword");

    let mut results = Vec::new();
    for country in list_countries(catalog) {
        let country_name = country.name();
        for city in country.cities() {
            let hit = MatchResult::new(city, country_name);
            let keep = match &intent {
                Intent::Category(category) => matches_category(&hit.city, country_name, *category),
                // The raw keyword, not the intent value; the matcher normalizes.
                Intent::Text(_) => matches_text(&hit.city, country_name, keyword),
            };
            if keep {
                results.push(hit);
            }
        }
    }

    let results = present(results);
    debug!(matches = results.len(), "search complete");
    results
}

/// "Show all matches, at least [`MIN_PRESENTED`] when available."
///
/// Slices to `max(MIN_PRESENTED, len)`, which is always the whole input: it
/// never truncates and never pads.
pub fn present<T>(mut results: Vec<T>) -> Vec<T> {
    let end = MIN_PRESENTED.max(results.len()).min(results.len());
    results.truncate(end);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::from_value(json!({
            "countries": [
                {
                    "name": "Thailand",
                    "cities": [
                        {"name": "Phuket", "tags": ["beach"]},
                        {"name": "Bangkok", "description": "Home to many temples"}
                    ]
                },
                {
                    "name": "Peru",
                    "cities": [{"name": "Cusco", "description": "Templo del Sol"}]
                }
            ]
        }))
    }

    #[test]
    fn category_search_keeps_catalog_order() {
        let hits = search(Some(&catalog()), Some("temple"));
        let names: Vec<_> = hits.iter().map(|h| (h.name(), h.country())).collect();
        assert_eq!(names, vec![("Bangkok", "Thailand"), ("Cusco", "Peru")]);
    }

    #[test]
    fn absent_inputs_degrade() {
        assert!(search(None, Some("beach")).is_empty());
        assert_eq!(search(Some(&catalog()), None).len(), 3);
        assert_eq!(search(Some(&catalog()), Some("")).len(), 3);
    }

    #[test]
    fn text_search_uses_raw_keyword() {
        let hits = search(Some(&catalog()), Some("  PHUK "));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Phuket");
    }

    #[test]
    fn present_is_a_no_op() {
        assert_eq!(present(Vec::<u8>::new()), Vec::<u8>::new());
        assert_eq!(present(vec![1]), vec![1]);
        assert_eq!(present(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
