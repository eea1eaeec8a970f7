use wasm_bindgen_test::*;

use travelreco_wasm::{empty_state_message, TravelSearch};

#[wasm_bindgen_test]
fn bundled_catalog_has_destinations() {
    let finder = TravelSearch::bundled().unwrap();
    assert_eq!(finder.country_count(), 4);
    assert_eq!(finder.city_count(), 8);
}

#[wasm_bindgen_test]
fn category_and_text_queries_count_matches() {
    let finder = TravelSearch::bundled().unwrap();
    assert_eq!(finder.match_count(Some("Beaches".into())), 3);
    assert_eq!(finder.match_count(Some("TEMPLE".into())), 3);
    assert_eq!(finder.match_count(Some("japan".into())), 2);
    assert_eq!(finder.match_count(Some("nonexistentplace".into())), 0);
    assert_eq!(finder.match_count(None), 8);
}

#[wasm_bindgen_test]
fn bare_array_catalog_is_accepted() {
    let finder =
        TravelSearch::new(r#"[{"name": "Thailand", "cities": [{"name": "Phuket", "tags": ["beach"]}]}]"#)
            .unwrap();
    assert_eq!(finder.match_count(Some("beach".into())), 1);
}

#[wasm_bindgen_test]
fn unrecognized_catalog_yields_no_matches() {
    let finder = TravelSearch::new(r#"{"places": [{"name": "Phuket"}]}"#).unwrap();
    assert_eq!(finder.country_count(), 0);
    assert_eq!(finder.match_count(None), 0);
}

#[wasm_bindgen_test]
fn empty_state_mentions_categories() {
    let msg = empty_state_message();
    assert!(msg.contains("beach") && msg.contains("temple"));
}
