//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use pokeharvest_core::{DEFAULT_LISTING_ENDPOINT, DEFAULT_PAGE_SIZE};

/// Harvest the PokéAPI catalog into a flat CSV dataset.
///
/// Pokeharvest fetches the full catalog listing, then every entry's detail
/// record, and flattens the results into one CSV file. Every flag has a
/// default: running with no arguments performs the complete
/// harvest-then-export pipeline.
#[derive(Parser, Debug)]
#[command(name = "pokeharvest")]
#[command(version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Listing page size; must be large enough to cover the whole catalog
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u32,

    /// Output path for the CSV dataset
    #[arg(short, long, default_value = "datasets/pokemons.csv")]
    pub output: PathBuf,

    /// Catalog listing endpoint
    #[arg(long, default_value = DEFAULT_LISTING_ENDPOINT)]
    pub endpoint: String,

    /// Per-request read timeout in seconds (1-300)
    #[arg(short = 't', long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..=300))]
    pub timeout: u16,
}
