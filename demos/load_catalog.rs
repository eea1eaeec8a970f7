//! Loading example for travelreco-rs
//!
//! Shows how catalog loading fails (and how searching never does).

use travelreco_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== travelreco-rs Catalog Loading ===\n");

    // Example 1: a path from the command line, or a path that does not exist
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "does/not/exist.json".to_string());
    println!("--- Example 1: Loading {path} ---");
    match Catalog::load_from_path(&path) {
        Ok(catalog) => println!("✓ Loaded {} countries", catalog.stats().countries),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: both accepted shapes
    println!("--- Example 2: Bare array vs. wrapped object ---");
    let bare = Catalog::from_json_str(r#"[{"name": "Peru", "cities": [{"name": "Cusco"}]}]"#)?;
    let wrapped =
        Catalog::from_json_str(r#"{"countries": [{"name": "Peru", "cities": [{"name": "Cusco"}]}]}"#)?;
    println!("  bare:    {:?}", bare.search("cusco").len());
    println!("  wrapped: {:?}", wrapped.search("cusco").len());
    println!();

    // Example 3: an unexpected shape degrades to "no results"
    println!("--- Example 3: Unrecognized shape ---");
    let odd = Catalog::from_json_str(r#"{"places": []}"#)?;
    println!("  recognized: {}", odd.is_recognized());
    println!("  results:    {}", odd.search("").len());

    Ok(())
}
