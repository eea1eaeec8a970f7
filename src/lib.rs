//! travelreco-rs
//!
//! Workspace host crate. Re-exports [`travelreco_core`] so the demos under
//! `demos/` can be run from the repository root:
//!
//! ```text
//! cargo run --example basic_search -- beaches
//! cargo run --example load_catalog -- path/to/catalog.json.gz
//! ```
pub use travelreco_core::*;
