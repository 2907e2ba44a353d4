//! End-to-end lookups against the bundled ISO 3166-1 dataset.

use countrydb_core::{flag_emoji, CountryDb, CountryDbError};

fn db() -> CountryDb {
    CountryDb::load().expect("bundled dataset loads")
}

#[test]
fn bundled_dataset_is_complete() {
    let db = db();
    assert_eq!(db.len(), 249, "ISO 3166-1 assigns 249 official entries");
    assert!(!db.is_empty());
    assert_eq!(db.countries().len(), db.len());
    assert_eq!(db.countries()[0].name(), "Afghanistan");
}

#[test]
fn load_returns_the_same_database_every_time() {
    let first = CountryDb::load().unwrap();
    let second = CountryDb::load().unwrap();
    assert_eq!(first.countries(), second.countries());
}

#[test]
fn taiwan_round_trip() {
    let db = db();
    let taiwan = db.find_by_alpha2("TW").expect("TW is in the dataset");
    assert_eq!(taiwan.name(), "Taiwan");
    assert_eq!(taiwan.alpha2(), "TW");
    assert_eq!(taiwan.alpha3(), "TWN");
    assert_eq!(taiwan.numeric(), "158");
    assert_eq!(taiwan.flag(), "🇹🇼");
}

#[test]
fn code_lookups_are_case_insensitive() {
    let db = db();
    let upper = db.find_by_alpha2("TW").unwrap();
    let lower = db.find_by_alpha2("tw").unwrap();
    let mixed = db.find_by_alpha2("tW").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);

    let usa = db.find_by_alpha3("usa").unwrap();
    assert_eq!(usa.name(), "United States of America");
    assert_eq!(usa, db.find_by_alpha3("USA").unwrap());
}

#[test]
fn every_record_is_reachable_through_all_three_indexes() {
    let db = db();
    for country in db.countries() {
        assert_eq!(db.find_by_alpha2(country.alpha2()), Some(country));
        assert_eq!(db.find_by_alpha3(country.alpha3()), Some(country));
        assert_eq!(db.find_by_numeric(country.numeric()), Some(country));
        assert_eq!(
            db.find_by_alpha2(&country.alpha2().to_lowercase()),
            Some(country)
        );
    }
}

#[test]
fn numeric_lookup_is_exact() {
    let db = db();
    assert_eq!(db.find_by_numeric("040").unwrap().name(), "Austria");
    // numeric codes are not normalized; only the stored zero-padded form hits
    assert!(db.find_by_numeric("40").is_none());
    assert!(db.find_by_numeric(" 040").is_none());
}

#[test]
fn unknown_codes_are_absent_not_errors() {
    let db = db();
    assert!(db.find_by_alpha2("XZ").is_none());
    assert!(db.find_by_alpha2("").is_none());
    assert!(db.find_by_alpha2("USA").is_none(), "alpha-3 never matches the alpha-2 index");
    assert!(db.find_by_alpha3("XXY").is_none());
    assert!(db.find_by_numeric("000").is_none());
}

#[test]
fn flags_project_straight_from_the_records() {
    let db = db();
    assert_eq!(db.flag_by_alpha2("TW"), Some("🇹🇼"));
    assert_eq!(db.flag_by_alpha3("twn"), Some("🇹🇼"));
    assert_eq!(db.flag_by_numeric("158"), Some("🇹🇼"));
    assert_eq!(db.flag_by_alpha2("XZ"), None);
    assert_eq!(db.flag_by_numeric("40"), None);

    for country in db.countries() {
        assert_eq!(db.flag_by_alpha2(country.alpha2()), Some(country.flag()));
        assert_eq!(country.flag(), flag_emoji(country.alpha2()));
    }
}

#[test]
fn validity_checks_mirror_the_lookups() {
    let db = db();
    assert!(db.is_valid_alpha2("tw"));
    assert!(db.is_valid_alpha3("TWN"));
    assert!(!db.is_valid_alpha3("XXY"));
    assert!(!db.is_valid_alpha2(""));

    for code in ["TW", "tw", "XZ", "USA", ""] {
        assert_eq!(db.is_valid_alpha2(code), db.find_by_alpha2(code).is_some());
    }
    for code in ["TWN", "twn", "XXY", "TW", ""] {
        assert_eq!(db.is_valid_alpha3(code), db.find_by_alpha3(code).is_some());
    }
}

#[test]
fn name_lookup_is_exact_but_case_insensitive() {
    let db = db();
    let taiwan = db.find_by_name("Taiwan").unwrap();
    assert_eq!(taiwan, db.find_by_name("taiwan").unwrap());
    assert_eq!(taiwan, db.find_by_name("TAIWAN").unwrap());
    assert_eq!(taiwan.alpha2(), "TW");

    assert!(db.find_by_name("Taiw").is_none(), "fragments need search_by_name");
    assert!(db.find_by_name("").is_none());
}

#[test]
fn name_lookup_handles_non_ascii_names() {
    let db = db();
    assert_eq!(db.find_by_name("côte d'ivoire").unwrap().alpha2(), "CI");
    assert_eq!(db.find_by_name("åland islands").unwrap().alpha2(), "AX");
}

#[test]
fn search_results_all_contain_the_query() {
    let db = db();
    let hits = db.search_by_name("land");
    assert!(!hits.is_empty());
    for country in &hits {
        assert!(
            country.name().to_lowercase().contains("land"),
            "{} does not contain the query",
            country.name()
        );
    }
    assert!(hits.iter().any(|c| c.name() == "Poland"));
}

#[test]
fn search_ranks_earlier_matches_and_shorter_names_first() {
    let db = db();
    // Poland matches at position 2 and is the shortest of the earliest hits
    assert_eq!(db.search_by_name("land")[0].name(), "Poland");

    let names: Vec<&str> = db.search_by_name("stan").iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        [
            "Pakistan",
            "Kazakhstan",
            "Kyrgyzstan",
            "Tajikistan",
            "Uzbekistan",
            "Afghanistan",
            "Turkmenistan",
            "Saint Helena, Ascension and Tristan da Cunha",
        ]
    );
}

#[test]
fn search_ties_keep_dataset_order() {
    let db = db();
    // all four names contain "guinea"; Guinea and Guinea-Bissau tie on
    // position 0 and are split by length
    let names: Vec<&str> = db.search_by_name("guinea").iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        ["Guinea", "Guinea-Bissau", "Papua New Guinea", "Equatorial Guinea"]
    );
}

#[test]
fn search_is_case_insensitive() {
    let db = db();
    let upper: Vec<&str> = db.search_by_name("GUINEA").iter().map(|c| c.name()).collect();
    let lower: Vec<&str> = db.search_by_name("guinea").iter().map(|c| c.name()).collect();
    assert_eq!(upper, lower);
}

#[test]
fn search_with_no_match_is_empty() {
    assert!(db().search_by_name("Atlantis").is_empty());
}

#[test]
fn search_with_empty_query_is_empty() {
    assert!(db().search_by_name("").is_empty());
}

#[test]
fn dataset_codes_are_unique() {
    let db = db();
    let mut alpha2: Vec<&str> = db.countries().iter().map(|c| c.alpha2()).collect();
    let mut alpha3: Vec<&str> = db.countries().iter().map(|c| c.alpha3()).collect();
    let mut numeric: Vec<&str> = db.countries().iter().map(|c| c.numeric()).collect();
    for codes in [&mut alpha2, &mut alpha3, &mut numeric] {
        let before = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }
}

#[test]
fn find_by_code_cascades_through_the_indexes() {
    let db = db();
    assert_eq!(db.find_by_code("DE").unwrap().name(), "Germany");
    assert_eq!(db.find_by_code("deu").unwrap().name(), "Germany");
    assert_eq!(db.find_by_code("276").unwrap().name(), "Germany");
    assert_eq!(db.find_by_code(" de ").unwrap().name(), "Germany");
    assert!(db.find_by_code("").is_none());
    assert!(db.find_by_code("bogus").is_none());
}

#[test]
fn custom_dataset_builds_and_shadows_nothing() {
    let json = r#"[
        {"name": "Utopia", "alpha2": "UT", "alpha3": "UTP", "numeric": "900"}
    ]"#;
    let db = CountryDb::from_json_str(json).unwrap();
    assert_eq!(db.len(), 1);
    assert_eq!(db.find_by_alpha2("ut").unwrap().flag(), flag_emoji("UT"));
    assert!(db.find_by_alpha2("TW").is_none(), "custom datasets replace, not extend");
}

#[test]
fn records_serialize_to_json() {
    let db = db();
    let taiwan = db.find_by_alpha2("TW").unwrap();
    let json = serde_json::to_value(taiwan).unwrap();
    assert_eq!(json["name"], "Taiwan");
    assert_eq!(json["alpha2"], "TW");
    assert_eq!(json["alpha3"], "TWN");
    assert_eq!(json["numeric"], "158");
    assert_eq!(json["flag"], "🇹🇼");
}

#[test]
fn malformed_dataset_is_a_json_error() {
    let err = CountryDb::from_json_str("definitely not json").unwrap_err();
    assert!(matches!(err, CountryDbError::Json(_)));
}

#[test]
fn missing_dataset_file_is_reported_as_not_found() {
    let err = CountryDb::load_from_path("/no/such/dataset.json").unwrap_err();
    assert!(matches!(err, CountryDbError::NotFound(_)));
    assert!(err.to_string().contains("/no/such/dataset.json"));
}
