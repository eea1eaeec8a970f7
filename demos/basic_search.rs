//! Basic usage example for travelreco-rs
//!
//! Searches the bundled catalog for a few keywords (or the one given on the
//! command line) and prints the result cards.

use travelreco_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== travelreco-rs Basic Search ===\n");

    let catalog = Catalog::bundled()?;
    let stats = catalog.stats();
    println!(
        "Loaded {} countries with {} cities\n",
        stats.countries, stats.cities
    );

    let keywords: Vec<String> = match std::env::args().nth(1) {
        Some(k) => vec![k],
        None => ["Beaches", "temple", "Japan", "nonexistentplace"]
            .map(String::from)
            .to_vec(),
    };

    for keyword in &keywords {
        let intent = catalog.intent(keyword);
        println!("--- {keyword:?} → {intent:?} ---");

        let hits = catalog.search(keyword);
        if hits.is_empty() {
            println!("  {EMPTY_STATE_MESSAGE}");
        }
        for card in cards(&hits) {
            println!("  {}", card.heading());
            println!("    {}", card.description);
        }
        println!();
    }

    Ok(())
}
