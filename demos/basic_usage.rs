//! Basic usage example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Load the country database
//! - Look up countries by code and by name
//! - Search countries by name fragment
//! - Derive emoji flags

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== CountryDB-RS Basic Usage Example ===\n");

    // Load the database
    println!("Loading country database...");
    let db = CountryDb::load()?;
    println!("✓ Database loaded successfully\n");

    // Example 1: Get all countries
    println!("--- Example 1: List all countries ---");
    let countries = db.countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} {} ({})", i + 1, country.flag(), country.name(), country.alpha2());
    }
    println!("... and {} more\n", countries.len() - 5);

    // Example 2: Find a specific country
    println!("--- Example 2: Find country by alpha-2 code ---");
    if let Some(country) = db.find_by_alpha2("US") {
        println!("Found: {}", country.name());
        println!("Alpha-2: {}", country.alpha2());
        println!("Alpha-3: {}", country.alpha3());
        println!("Numeric: {}", country.numeric());
        println!("Flag: {}", country.flag());
    }
    println!();

    // Example 3: Codes are case-insensitive, numeric codes are exact
    println!("--- Example 3: Lookup by other codes ---");
    if let Some(country) = db.find_by_alpha3("deu") {
        println!("deu -> {}", country.name());
    }
    if let Some(country) = db.find_by_numeric("158") {
        println!("158 -> {}", country.name());
    }
    if let Some(country) = db.find_by_code(" pl ") {
        println!("' pl ' -> {} (find_by_code trims and cascades)", country.name());
    }
    println!();

    // Example 4: Exact name lookup
    println!("--- Example 4: Find country by name ---");
    if let Some(country) = db.find_by_name("taiwan") {
        println!("taiwan -> {} {}", country.flag(), country.name());
    }
    println!();

    // Example 5: Substring search, ranked
    println!("--- Example 5: Search countries by name fragment ---");
    let query = "land";
    let hits = db.search_by_name(query);
    println!("Countries matching '{}': {}", query, hits.len());
    for (i, country) in hits.iter().take(5).enumerate() {
        println!("{}. {} {}", i + 1, country.flag(), country.name());
    }
    println!("... and {} more\n", hits.len() - 5);

    // Example 6: Validity checks
    println!("--- Example 6: Code validation ---");
    for code in ["TW", "tw", "XZ"] {
        println!("is_valid_alpha2({code:?}) = {}", db.is_valid_alpha2(code));
    }
    println!("is_valid_alpha3(\"XXY\") = {}\n", db.is_valid_alpha3("XXY"));

    // Example 7: Using the cache
    println!("--- Example 7: Cache usage ---");
    println!("First load (parses and indexes):");
    let start = std::time::Instant::now();
    let _db1 = CountryDb::load()?;
    println!("Time: {:?}", start.elapsed());

    println!("Second load (clone of the cached instance):");
    let start = std::time::Instant::now();
    let _db2 = CountryDb::load()?;
    println!("Time: {:?}", start.elapsed());
    println!();

    // Example 8: Standalone flag derivation
    println!("--- Example 8: Emoji flags ---");
    for code in ["TW", "US", "PL", "AQ"] {
        println!("{code} -> {}", flag_emoji(code));
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
