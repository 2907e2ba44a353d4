// src/lib.rs

//! countrydb-rs
//!
//! Workspace facade over [`countrydb_core`]: re-exports the core API so the
//! bundled example programs can depend on a single package. For library use
//! depend on `countrydb-core` directly.

pub use countrydb_core::prelude;
pub use countrydb_core::{flag_emoji, Country, CountryDb, CountryDbError, Result};
