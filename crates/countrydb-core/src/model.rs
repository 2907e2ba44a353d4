// crates/countrydb-core/src/model.rs

use serde::Serialize;

/// One ISO 3166-1 country, enriched with its emoji flag.
///
/// Records are built once while the database is constructed and never
/// mutated afterwards; lookups hand them out by reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Country {
    pub(crate) name: String,
    pub(crate) alpha2: String,
    pub(crate) alpha3: String,
    pub(crate) numeric: String,
    pub(crate) flag: String,
}

impl Country {
    /// Official short name, e.g. "Taiwan".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Two-letter alpha-2 code, stored uppercase, e.g. "TW".
    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    /// Three-letter alpha-3 code, stored uppercase, e.g. "TWN".
    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    /// Three-digit numeric code with leading zeros kept, e.g. "158" or "040".
    pub fn numeric(&self) -> &str {
        &self.numeric
    }

    /// Emoji flag derived from the alpha-2 code.
    pub fn flag(&self) -> &str {
        &self.flag
    }
}
