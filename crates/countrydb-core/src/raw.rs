// crates/countrydb-core/src/raw.rs

use serde::Deserialize;

/// A country row exactly as it appears in the dataset JSON.
///
/// NOTE: this mirrors the external dataset shape. It is *not* exposed from
/// the public API; rows are converted into [`Country`](crate::Country)
/// records (flag derived, indexes built) when the database is constructed.
#[derive(Debug, Deserialize)]
pub(crate) struct CountryRaw {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
}

pub(crate) type CountriesRaw = Vec<CountryRaw>;
