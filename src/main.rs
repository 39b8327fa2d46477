//! CLI entry point for the pokeharvest tool.

use std::io::{self, IsTerminal};
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use clap::Parser;
use pokeharvest_core::{HarvestEngine, PokeApiClient, write_csv};
use tracing::{debug, info};
use url::Url;

mod cli;
mod progress;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Harvest starting");

    let endpoint = Url::parse(&args.endpoint)
        .with_context(|| format!("invalid listing endpoint: {}", args.endpoint))?;

    let client = PokeApiClient::with_endpoint(endpoint, u64::from(args.timeout));
    let engine = HarvestEngine::new(client);
    let stats = engine.stats();

    // Spinner only when a human is watching; diagnostics go through tracing.
    let use_spinner = !args.quiet && io::stderr().is_terminal();
    let (progress_handle, stop) = progress::spawn_progress_ui(use_spinner, engine.stats());

    let records = engine.run(args.limit).await;

    stop.store(true, Ordering::SeqCst);
    if let Some(handle) = progress_handle {
        let _ = handle.await;
    }

    info!(
        listed = stats.listed(),
        collected = stats.collected(),
        skipped = stats.skipped(),
        "Harvest complete"
    );

    // Harvest failures degrade the dataset; only an export failure is fatal.
    write_csv(&records, &args.output)
        .with_context(|| format!("failed to export CSV to {}", args.output.display()))?;

    Ok(())
}
