use clap::{Parser, Subcommand};

/// CLI arguments for travelreco
#[derive(Debug, Parser)]
#[command(
    name = "travelreco",
    version,
    about = "CLI for searching a travel recommendation catalog"
)]
pub struct CliArgs {
    /// Path to the catalog JSON (or .json.gz) file (default: bundled dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// URL to fetch the catalog from instead of reading a file (needs the `fetch` feature)
    #[arg(short = 'u', long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// Print JSON instead of human-readable text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search destinations by keyword ("beach", "temple", or any text)
    Search {
        /// Keyword to search for; omit to list every destination
        keyword: Option<String>,
    },

    /// Show how a keyword would be interpreted
    Classify {
        /// Keyword to classify
        keyword: String,
    },

    /// List all countries
    Countries,

    /// Show a summary of the catalog contents
    Stats,
}
