// crates/countrydb-core/src/db.rs

use std::collections::HashMap;

use crate::flag::flag_emoji;
use crate::model::Country;
use crate::raw::CountryRaw;

/// One entry of the precomputed name-search index.
///
/// `idx` points back into the record vector, so searches can return the
/// original records without recomputing anything per query.
#[derive(Clone, Debug)]
pub(crate) struct SearchEntry {
    pub(crate) lower_name: String,
    pub(crate) idx: usize,
}

/// The country database.
///
/// Holds every record in dataset order, one lookup map per code type and
/// the case-folded search index. Built in one pass and never mutated
/// afterwards, so sharing it by reference across threads is safe.
#[derive(Clone, Debug)]
pub struct CountryDb {
    pub(crate) countries: Vec<Country>,
    by_alpha2: HashMap<String, usize>,
    by_alpha3: HashMap<String, usize>,
    by_numeric: HashMap<String, usize>,
    pub(crate) search: Vec<SearchEntry>,
}

impl CountryDb {
    /// Build the database from raw dataset rows, consumed in dataset order.
    ///
    /// Flags are derived here and the three code maps plus the search index
    /// are filled in the same pass. Should two rows ever carry the same
    /// code, the later row wins in the affected map while both records stay
    /// in the record vector. The bundled dataset has unique codes
    /// throughout, so this only matters for hand-rolled datasets.
    pub(crate) fn from_raw(rows: Vec<CountryRaw>) -> Self {
        let mut countries = Vec::with_capacity(rows.len());
        let mut by_alpha2 = HashMap::with_capacity(rows.len());
        let mut by_alpha3 = HashMap::with_capacity(rows.len());
        let mut by_numeric = HashMap::with_capacity(rows.len());
        let mut search = Vec::with_capacity(rows.len());

        for row in rows {
            let idx = countries.len();
            let flag = flag_emoji(&row.alpha2);
            let country = Country {
                name: row.name,
                alpha2: row.alpha2,
                alpha3: row.alpha3,
                numeric: row.numeric,
                flag,
            };

            by_alpha2.insert(country.alpha2.to_ascii_uppercase(), idx);
            by_alpha3.insert(country.alpha3.to_ascii_uppercase(), idx);
            by_numeric.insert(country.numeric.clone(), idx);
            search.push(SearchEntry {
                lower_name: country.name.to_lowercase(),
                idx,
            });
            countries.push(country);
        }

        CountryDb {
            countries,
            by_alpha2,
            by_alpha3,
            by_numeric,
            search,
        }
    }

    /// All countries in dataset order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Number of countries in the database.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// True when the database holds no records.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by its alpha-2 code, case-insensitive.
    ///
    /// `"DE"`, `"de"` and `"dE"` all resolve to Germany. Anything that is
    /// not a known alpha-2 code returns `None`.
    pub fn find_by_alpha2(&self, code: &str) -> Option<&Country> {
        self.by_alpha2
            .get(&code.to_ascii_uppercase())
            .map(|&idx| &self.countries[idx])
    }

    /// Find a country by its alpha-3 code, case-insensitive.
    pub fn find_by_alpha3(&self, code: &str) -> Option<&Country> {
        self.by_alpha3
            .get(&code.to_ascii_uppercase())
            .map(|&idx| &self.countries[idx])
    }

    /// Find a country by its numeric code.
    ///
    /// The match is exact: codes are stored zero-padded to three digits, so
    /// `"040"` finds Austria while `"40"` does not.
    pub fn find_by_numeric(&self, code: &str) -> Option<&Country> {
        self.by_numeric.get(code).map(|&idx| &self.countries[idx])
    }

    /// Find a country by any code, trying alpha-2, then alpha-3, then
    /// numeric. Input is trimmed first; letter codes are case-insensitive.
    ///
    /// Examples:
    /// - `"DE"` matches via alpha-2
    /// - `"deu"` matches via alpha-3
    /// - `"276"` matches via numeric
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.find_by_alpha2(code)
            .or_else(|| self.find_by_alpha3(code))
            .or_else(|| self.find_by_numeric(code))
    }

    /// Emoji flag for an alpha-2 code, `None` when the code is unknown.
    pub fn flag_by_alpha2(&self, code: &str) -> Option<&str> {
        self.find_by_alpha2(code).map(|c| c.flag())
    }

    /// Emoji flag for an alpha-3 code, `None` when the code is unknown.
    pub fn flag_by_alpha3(&self, code: &str) -> Option<&str> {
        self.find_by_alpha3(code).map(|c| c.flag())
    }

    /// Emoji flag for a numeric code, `None` when the code is unknown.
    pub fn flag_by_numeric(&self, code: &str) -> Option<&str> {
        self.find_by_numeric(code).map(|c| c.flag())
    }

    /// True when `code` is an assigned alpha-2 code, case-insensitive.
    pub fn is_valid_alpha2(&self, code: &str) -> bool {
        self.by_alpha2.contains_key(&code.to_ascii_uppercase())
    }

    /// True when `code` is an assigned alpha-3 code, case-insensitive.
    pub fn is_valid_alpha3(&self, code: &str) -> bool {
        self.by_alpha3.contains_key(&code.to_ascii_uppercase())
    }
}
