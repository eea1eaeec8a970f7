//! travelreco-wasm — WebAssembly bindings for travelreco-core
//!
//! This crate exposes a small JS/WASM API on top of `travelreco-core`. The
//! page owns the catalog: it builds a [`TravelSearch`] once (from fetched
//! JSON, from an already-parsed JS object, or from the embedded dataset) and
//! calls `search` on it for every user query.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { TravelSearch, emptyStateMessage } from 'travelreco-wasm';
//!
//! async function main() {
//!   await init();
//!   const res = await fetch('travel_recommendation_api.json');
//!   const finder = TravelSearch.fromJs(await res.json());
//!
//!   document.getElementById('searchBtn').addEventListener('click', () => {
//!     const cards = finder.searchCards(document.getElementById('searchInput').value);
//!     if (cards.length === 0) console.log(emptyStateMessage());
//!     // cards: [{ title, country, description, image, visit_url }, ...]
//!   });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - `TravelSearch.bundled()` uses the dataset compiled into the binary.
//! - Results cross the boundary as plain JSON-compatible objects (no `Map`s).
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use std::result::Result;
use travelreco_core::prelude::*;

static EMBEDDED_CATALOG: &str =
    include_str!("../../travelreco-core/data/travel_recommendation_api.json");

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing travelreco WASM module...".into());
}

/// Serializes with plain objects instead of JS `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(e: TravelError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/* --------------------------------------------------------------------------
   Search Context
-------------------------------------------------------------------------- */

/// A loaded catalog plus the search operations over it.
#[wasm_bindgen]
pub struct TravelSearch {
    catalog: Catalog,
}

#[wasm_bindgen]
impl TravelSearch {
    /// Parses catalog JSON text.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<TravelSearch, JsValue> {
        let catalog = Catalog::from_json_str(json).map_err(to_js_error)?;
        Ok(Self::with_catalog(catalog))
    }

    /// Takes an already-parsed JS value (e.g. the result of `res.json()`).
    #[wasm_bindgen(js_name = fromJs)]
    pub fn from_js(value: JsValue) -> Result<TravelSearch, JsValue> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(value)?;
        Ok(Self::with_catalog(Catalog::from_value(value)))
    }

    /// The catalog embedded at build time.
    pub fn bundled() -> Result<TravelSearch, JsValue> {
        Self::new(EMBEDDED_CATALOG)
    }

    /// Matching destinations, each a city object with a `country` field.
    pub fn search(&self, keyword: Option<String>) -> Result<JsValue, JsValue> {
        to_js(&self.hits(keyword.as_deref()))
    }

    /// Matching destinations as display cards.
    #[wasm_bindgen(js_name = searchCards)]
    pub fn search_cards(&self, keyword: Option<String>) -> Result<JsValue, JsValue> {
        let array = js_sys::Array::new();
        for card in cards(&self.hits(keyword.as_deref())) {
            array.push(&to_js(&card)?);
        }
        Ok(array.into())
    }

    #[wasm_bindgen(js_name = matchCount)]
    pub fn match_count(&self, keyword: Option<String>) -> usize {
        self.hits(keyword.as_deref()).len()
    }

    #[wasm_bindgen(js_name = countryCount)]
    pub fn country_count(&self) -> usize {
        self.catalog.stats().countries
    }

    #[wasm_bindgen(js_name = cityCount)]
    pub fn city_count(&self) -> usize {
        self.catalog.stats().cities
    }
}

impl TravelSearch {
    fn with_catalog(catalog: Catalog) -> Self {
        // The console binding panics off wasm32.
        if cfg!(target_arch = "wasm32") && !catalog.is_recognized() {
            web_sys::console::warn_1(&"travelreco: catalog shape not recognized".into());
        }
        TravelSearch { catalog }
    }

    fn hits(&self, keyword: Option<&str>) -> Vec<MatchResult> {
        search(Some(&self.catalog), keyword)
    }
}

/* --------------------------------------------------------------------------
   Stateless helpers
-------------------------------------------------------------------------- */

/// `{ type: "category" | "text", value }` for a keyword.
#[wasm_bindgen]
pub fn classify(keyword: &str) -> Result<JsValue, JsValue> {
    to_js(&Intent::classify(keyword))
}

#[wasm_bindgen(js_name = emptyStateMessage)]
pub fn empty_state_message() -> String {
    EMPTY_STATE_MESSAGE.to_owned()
}
