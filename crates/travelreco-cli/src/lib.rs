//! travelreco-cli
//! ==============
//!
//! Command-line interface for the `travelreco-core` catalog search.
//!
//! This crate primarily provides a binary (`travelreco`). The library target
//! only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! travelreco search beaches
//! travelreco --json search kyoto
//! travelreco --input my_catalog.json.gz countries
//! travelreco classify Temples
//! ```
//!
//! For programmatic access use the [`travelreco-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
