//! travelreco — Command-line interface for travelreco-core
//!
//! Usage examples
//! --------------
//!
//! - Category search (case and plural insensitive)
//!   $ travelreco search Beaches
//!
//! - Free-text search over names, descriptions, countries, keywords and tags
//!   $ travelreco search kyoto
//!
//! - Machine-readable output
//!   $ travelreco --json search temple
//!
//! - A different catalog (bare array or `{"countries": [...]}`; `.gz` ok)
//!   $ travelreco --input catalog.json.gz stats
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=travelreco_core=debug`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use travelreco_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = load_catalog(&args)?;

    match args.command {
        Commands::Search { keyword } => {
            let hits = search(Some(&catalog), keyword.as_deref());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if hits.is_empty() {
                println!("{EMPTY_STATE_MESSAGE}");
            } else {
                for card in cards(&hits) {
                    println!("{}", card.heading());
                    println!("  {}", card.description);
                    if let Some(image) = &card.image {
                        println!("  image: {image}");
                    }
                    println!("  visit: {}", card.visit_url);
                }
            }
        }

        Commands::Classify { keyword } => {
            let intent = Intent::classify(&keyword);
            if args.json {
                println!("{}", serde_json::to_string(&intent)?);
            } else {
                match intent {
                    Intent::Category(c) => println!("category: {c} ({})", c.synonyms().join(", ")),
                    Intent::Text(t) => println!("text: {t:?}"),
                }
            }
        }

        Commands::Countries => {
            if args.json {
                let names: Vec<_> = catalog.countries().iter().map(|c| c.name()).collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for c in catalog.countries() {
                    println!("{} ({} cities)", c.name(), c.cities().len());
                }
            }
        }

        Commands::Stats => {
            let stats = catalog.stats();
            if args.json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Countries: {}", stats.countries);
                println!("  Cities: {}", stats.cities);
            }
        }
    }

    Ok(())
}

fn load_catalog(args: &CliArgs) -> anyhow::Result<Catalog> {
    if let Some(url) = &args.url {
        #[cfg(feature = "fetch")]
        return Catalog::fetch(url).with_context(|| format!("fetching catalog from {url}"));

        #[cfg(not(feature = "fetch"))]
        anyhow::bail!("cannot fetch {url}: built without the `fetch` feature");
    }

    let path = args
        .input
        .clone()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(Catalog::default_dataset_path);
    debug!(path = %path.display(), "reading catalog");

    Catalog::load_from_path(&path).with_context(|| format!("loading catalog from {}", path.display()))
}
