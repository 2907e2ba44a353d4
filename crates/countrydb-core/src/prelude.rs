// crates/countrydb-core/src/prelude.rs

//! Convenience prelude: glob-import the types almost every caller needs.
//!
//! ```
//! use countrydb_core::prelude::*;
//!
//! let db = CountryDb::load()?;
//! assert!(db.is_valid_alpha2("PL"));
//! # Ok::<(), CountryDbError>(())
//! ```

pub use crate::error::{CountryDbError, Result};
pub use crate::flag::flag_emoji;
pub use crate::model::Country;
pub use crate::CountryDb;
