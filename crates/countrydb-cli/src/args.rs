use clap::{Parser, Subcommand};

/// CLI arguments for countrydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "CLI for querying the countrydb-core ISO 3166-1 country database"
)]
pub struct CliArgs {
    /// Path to an alternate dataset JSON file (default: the embedded ISO 3166-1 dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all countries
    Countries,

    /// Look up a country by alpha-2, alpha-3 or numeric code
    Country {
        /// alpha-2, alpha-3 or numeric code (e.g. DE, USA, 158)
        code: String,
    },

    /// Search countries by name fragment
    Search {
        /// Name fragment to search (case-insensitive)
        query: String,
    },

    /// Print the emoji flag for a country code
    Flag {
        /// alpha-2, alpha-3 or numeric code
        code: String,
    },
}
