//! countrydb-cli — Command-line interface for countrydb-core
//!
//! This binary provides a simple way to query the bundled ISO 3166-1
//! country database from your terminal. It supports printing basic
//! statistics, listing countries, looking up a specific country by code,
//! searching countries by name fragment, and printing emoji flags.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ countrydb stats
//!
//! - List all countries
//!   $ countrydb countries
//!
//! - Show details for a country by code (alpha-2, alpha-3 or numeric,
//!   letter codes case-insensitive)
//!   $ countrydb country us
//!   $ countrydb country deu
//!   $ countrydb country 158
//!
//! - Search countries by name fragment
//!   $ countrydb search land
//!
//! - Print the emoji flag for a code
//!   $ countrydb flag tw
//!
//! Data source
//! -----------
//!
//! By default, the CLI uses the ISO 3166-1 dataset compiled into the
//! `countrydb-core` crate. Use `--input <path>` to point to a custom JSON
//! dataset of the same shape.
//!
//! See also: the repository README for more details and examples.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use countrydb_core::CountryDb;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Load DB (embedded dataset unless an input file was given)
    let db = match &args.input {
        Some(path) => CountryDb::load_from_path(path)?,
        None => CountryDb::load()?,
    };

    match args.command {
        Commands::Stats => {
            println!("Database statistics:");
            println!("  Countries: {}", db.len());
        }

        Commands::Countries => {
            for c in db.countries() {
                println!("{} {} ({})", c.flag(), c.name(), c.alpha2());
            }
        }

        Commands::Country { code } => match db.find_by_code(&code) {
            Some(c) => {
                println!("Country: {}", c.name());
                println!("Alpha-2: {}", c.alpha2());
                println!("Alpha-3: {}", c.alpha3());
                println!("Numeric: {}", c.numeric());
                println!("Flag: {}", c.flag());
            }
            None => {
                eprintln!("No country found for: {code}");
            }
        },

        Commands::Search { query } => {
            let matches = db.search_by_name(&query);
            if matches.is_empty() {
                println!("No countries found matching: {query}");
            } else {
                for c in matches {
                    println!("{} {} ({}/{})", c.flag(), c.name(), c.alpha2(), c.alpha3());
                }
            }
        }

        Commands::Flag { code } => match db.find_by_code(&code) {
            Some(c) => println!("{}", c.flag()),
            None => eprintln!("No country found for: {code}"),
        },
    }

    Ok(())
}
