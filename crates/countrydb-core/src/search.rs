// crates/countrydb-core/src/search.rs

use crate::db::{CountryDb, SearchEntry};
use crate::model::Country;

impl CountryDb {
    /// Find a country by its full name, case-insensitive.
    ///
    /// `"taiwan"`, `"Taiwan"` and `"TAIWAN"` all hit the same record; a
    /// fragment like `"Taiw"` does not (use [`search_by_name`] for that).
    /// The empty string matches nothing.
    ///
    /// [`search_by_name`]: CountryDb::search_by_name
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        if name.is_empty() {
            return None;
        }
        let q = name.to_lowercase();
        self.search
            .iter()
            .find(|entry| entry.lower_name == q)
            .map(|entry| &self.countries[entry.idx])
    }

    /// Search countries whose name contains `query`, case-insensitive.
    ///
    /// Results are ranked by how early the query occurs in the name, with
    /// shorter names winning ties; rows tied on both keys keep their
    /// dataset order. The empty query returns no matches rather than every
    /// country.
    ///
    /// # Examples
    ///
    /// ```
    /// use countrydb_core::CountryDb;
    ///
    /// let db = CountryDb::load().unwrap();
    /// let hits = db.search_by_name("guinea");
    /// assert_eq!(hits[0].name(), "Guinea");
    /// ```
    pub fn search_by_name(&self, query: &str) -> Vec<&Country> {
        if query.is_empty() {
            return Vec::new();
        }
        let q = query.to_lowercase();

        let mut hits: Vec<(usize, &SearchEntry)> = Vec::new();
        for entry in &self.search {
            if let Some(pos) = entry.lower_name.find(&q) {
                hits.push((pos, entry));
            }
        }

        // Earlier match first, then shorter name; the stable sort keeps
        // dataset order for full ties.
        hits.sort_by(|(pos_a, a), (pos_b, b)| {
            pos_a
                .cmp(pos_b)
                .then_with(|| a.lower_name.len().cmp(&b.lower_name.len()))
        });

        hits.into_iter()
            .map(|(_, entry)| &self.countries[entry.idx])
            .collect()
    }
}
