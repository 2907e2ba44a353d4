// crates/countrydb-core/src/loader.rs

use crate::db::CountryDb;
use crate::error::{CountryDbError, Result};
use crate::raw::CountriesRaw;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The bundled ISO 3166-1 dataset: all 249 officially assigned entries, in
/// alphabetical name order.
static EMBEDDED_DATASET: &str = include_str!("../data/iso3166.json");

// Single in-process cache so we only parse and index once per process.
static COUNTRY_DB_CACHE: OnceCell<CountryDb> = OnceCell::new();

impl CountryDb {
    /// Load the database from the dataset bundled into the crate.
    ///
    /// The dataset is parsed and indexed on the first call; later calls
    /// clone the cached instance. No file or network access is involved,
    /// the data is compiled in via `include_str!`.
    pub fn load() -> Result<Self> {
        COUNTRY_DB_CACHE
            .get_or_try_init(|| Self::from_json_str(EMBEDDED_DATASET))
            .cloned()
    }

    /// Build a database from a JSON dataset string.
    ///
    /// The expected shape is an array of objects with `name`, `alpha2`,
    /// `alpha3` and `numeric` string fields; array order becomes dataset
    /// order.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows: CountriesRaw = serde_json::from_str(json)?;
        Ok(Self::from_raw(rows))
    }

    /// Build a database from any reader yielding the JSON dataset.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let rows: CountriesRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(rows))
    }

    /// Build a database from a dataset file on disk.
    ///
    /// Useful for trying out alternate or trimmed datasets without
    /// rebuilding the crate.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| {
            CountryDbError::NotFound(format!("Dataset not found at path: {}", path.display()))
        })?;
        Self::from_json_reader(BufReader::new(file))
    }
}
