//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` country database.
//!
//! This crate primarily provides a binary (`countrydb`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install countrydb-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! countrydb --help
//! countrydb stats
//! countrydb country us
//! countrydb search land
//! countrydb flag tw
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! `countrydb-core` crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
