// crates/countrydb-core/src/lib.rs

//! ISO 3166-1 country lookup over an embedded dataset.
//!
//! Load the [`CountryDb`] once, then resolve alpha-2 / alpha-3 / numeric
//! codes, exact names or name fragments to [`Country`] records complete
//! with their emoji flag:
//!
//! ```
//! use countrydb_core::CountryDb;
//!
//! let db = CountryDb::load()?;
//! let taiwan = db.find_by_alpha2("tw").unwrap();
//! assert_eq!(taiwan.name(), "Taiwan");
//! assert_eq!(taiwan.alpha3(), "TWN");
//! assert_eq!(taiwan.flag(), "🇹🇼");
//! # Ok::<(), countrydb_core::CountryDbError>(())
//! ```

mod db;
pub mod error;
pub mod flag;
mod loader;
mod model;
pub mod prelude;
mod raw; // Shared raw input, mirrors the dataset JSON
mod search;

// Re-exports
pub use crate::db::CountryDb;
pub use crate::error::{CountryDbError, Result};
pub use crate::flag::flag_emoji;
pub use crate::model::Country;
