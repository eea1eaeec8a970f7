// crates/travelreco-core/src/matcher.rs

//! # Matcher
//!
//! Decides whether a single city answers a query. Both predicates flatten the
//! relevant fields into one searchable string and test substring containment
//! on it; absent fields contribute nothing.

use crate::intent::Category;
use crate::model::City;
use crate::text::{contains_any, normalize};

/// Joins the searchable fields of a city.
const FIELD_SEPARATOR: &str = " | ";

/// Which city fields take part in the searchable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fields {
    /// Name, description, country, keywords and tags.
    Text,
    /// Everything in `Text` plus category tags and the city type.
    Category,
}

/// Normalized, separator-joined text of the selected fields.
///
/// Empty source values are skipped before normalizing, so a whitespace-only
/// value still leaves an (empty) slot.
fn searchable_text(city: &City, country_name: &str, fields: Fields) -> String {
    let mut parts: Vec<&str> = Vec::new();
    parts.extend(city.name.as_deref());
    parts.extend(city.description.as_deref());
    parts.push(country_name);
    parts.extend(city.keywords.iter().map(String::as_str));
    parts.extend(city.tags.iter().map(String::as_str));
    if fields == Fields::Category {
        parts.extend(city.categories.iter().map(String::as_str));
        parts.extend(city.r#type.as_deref());
    }

    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(normalize)
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Does the city mention `category` (or one of its synonyms) anywhere in
/// its name, description, country, keywords, tags, categories or type?
pub fn matches_category(city: &City, country_name: &str, category: Category) -> bool {
    let searchable = searchable_text(city, country_name, Fields::Category);
    contains_any(&searchable, category.synonyms())
}

/// Free-text match. `text` is normalized here, so callers may pass the raw
/// keyword.
///
/// True when the normalized query is a substring of the joined text fields,
/// of the city name alone, or of the country name alone. An empty query
/// matches every city.
pub fn matches_text(city: &City, country_name: &str, text: &str) -> bool {
    let t = normalize(text);
    let searchable = searchable_text(city, country_name, Fields::Text);
    searchable.contains(&t)
        || normalize(city.name()).contains(&t)
        || normalize(country_name).contains(&t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn city(v: serde_json::Value) -> City {
        City::from_value(&v)
    }

    #[test]
    fn searchable_text_skips_absent_fields() {
        let c = city(json!({"name": "Kyoto", "tags": ["Culture", ""], "type": "City"}));
        assert_eq!(searchable_text(&c, "Japan", Fields::Text), "kyoto | japan | culture");
        assert_eq!(
            searchable_text(&c, "Japan", Fields::Category),
            "kyoto | japan | culture | city"
        );
        assert_eq!(searchable_text(&City::default(), "", Fields::Category), "");
    }

    #[test]
    fn category_matches_via_synonyms() {
        let c = city(json!({"name": "Valparaíso", "description": "Colourful hills over the Pacific coast"}));
        assert!(matches_category(&c, "Chile", Category::Beach));
        assert!(!matches_category(&c, "Chile", Category::Temple));

        let c = city(json!({"name": "Nikko", "keywords": ["Shrine"]}));
        assert!(matches_category(&c, "Japan", Category::Temple));
    }

    #[test]
    fn category_only_fields_count_for_categories() {
        let c = city(json!({"name": "Cancún", "categories": ["Playa"]}));
        assert!(matches_category(&c, "Mexico", Category::Beach));
        assert!(!matches_text(&c, "Mexico", "playa"));

        let c = city(json!({"name": "Bagan", "type": "temple town"}));
        assert!(matches_category(&c, "Myanmar", Category::Temple));
        assert!(!matches_text(&c, "Myanmar", "temple"));
    }

    #[test]
    fn category_matches_country_name() {
        let c = city(json!({"name": "Anywhere"}));
        assert!(matches_category(&c, "Ivory Coast", Category::Beach));
    }

    #[test]
    fn text_matches_are_case_insensitive_substrings() {
        let c = city(json!({"name": "Rio de Janeiro", "keywords": ["Carnival"]}));
        assert!(matches_text(&c, "Brazil", "  RIO "));
        assert!(matches_text(&c, "Brazil", "carni"));
        assert!(matches_text(&c, "Brazil", "braz"));
        assert!(!matches_text(&c, "Brazil", "paris"));
    }

    #[test]
    fn text_matches_on_city_name_or_country_alone() {
        let c = city(json!({"name": "Hoi An", "description": "Lantern-lit old town"}));
        assert!(matches_text(&c, "Vietnam", "hoi"));
        assert!(matches_text(&c, "Vietnam", "viet"));

        // No city fields at all: only the country name can answer.
        assert!(matches_text(&City::default(), "Vietnam", "NAM"));
        assert!(!matches_text(&City::default(), "Vietnam", "hoi"));

        // No country name: only the city's own fields can answer.
        assert!(matches_text(&c, "", "hoi an"));
        assert!(!matches_text(&c, "", "vietnam"));
    }

    #[test]
    fn falsy_values_are_not_searchable() {
        let c = city(json!({
            "name": "Phuket",
            "tags": ["beach", null, 0, false],
            "keywords": "surf",
            "type": null
        }));
        assert!(matches_text(&c, "Thailand", "beach"));
        assert!(!matches_text(&c, "Thailand", "0"));
        assert!(!matches_text(&c, "Thailand", "surf"));
        assert!(!matches_text(&c, "Thailand", "false"));
        assert!(!matches_category(&city(json!({"type": null, "tags": [0]})), "", Category::Beach));
    }

    #[test]
    fn empty_text_matches_everything() {
        assert!(matches_text(&City::default(), "", ""));
        assert!(matches_text(&City::default(), "", "   "));
    }

    #[test]
    fn text_can_span_the_separator() {
        let c = city(json!({"name": "Kyoto"}));
        assert!(matches_text(&c, "Japan", "kyoto | jap"));
    }
}
