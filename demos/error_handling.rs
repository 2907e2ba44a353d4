//! Error handling example for countrydb-rs
//!
//! This example demonstrates proper error handling and edge cases

use countrydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== CountryDB-RS Error Handling Example ===\n");

    // Example 1: Handling database load errors
    println!("--- Example 1: Loading database with error handling ---");
    match CountryDb::load() {
        Ok(db) => {
            println!("✓ Database loaded successfully");
            println!("  Countries: {}", db.len());
        }
        Err(e) => {
            eprintln!("✗ Failed to load database: {e}");
            return Err(e);
        }
    }
    println!();

    let db = CountryDb::load()?;

    // Example 2: Unknown codes come back as None, never as errors
    println!("--- Example 2: Searching for non-existent country ---");
    for code in ["XX", "XZ", "ZZ"] {
        match db.find_by_alpha2(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.alpha2()),
            None => println!("  Not found: {code}"),
        }
    }
    println!();

    // Example 3: Malformed input behaves the same way
    println!("--- Example 3: Handling invalid codes ---");
    for code in ["", "A", "ABCD", "123"] {
        match db.find_by_alpha2(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.alpha2()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 4: Loading a custom dataset can fail
    println!("--- Example 4: Loading a dataset from a path ---");
    match CountryDb::load_from_path("/no/such/dataset.json") {
        Ok(db) => println!("  Loaded {} countries", db.len()),
        Err(e) => println!("  Expected failure: {e}"),
    }

    Ok(())
}
