//! Harvest engine: one listing fetch, one detail fetch per entry.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{FetchError, ListingEntry, PokeApiClient};
use crate::model::PokemonRecord;

use super::stats::HarvestStats;

/// Sequential catalog harvester.
///
/// The engine issues one listing request, then walks the entries in listing
/// order, fetching and projecting each detail body. Every detail fetch
/// completes or fails before the next begins; total fetch count is one plus
/// the listing length. The output preserves listing order minus skipped
/// entries and never contains a partial record.
///
/// # Example
///
/// ```no_run
/// use pokeharvest_core::{HarvestEngine, PokeApiClient};
///
/// # async fn example() {
/// let engine = HarvestEngine::new(PokeApiClient::new());
/// let records = engine.run(10_000).await;
/// println!("collected {} records", records.len());
/// # }
/// ```
#[derive(Debug)]
pub struct HarvestEngine {
    /// API client, shared by the listing and every detail fetch.
    client: PokeApiClient,
    /// Run counters, shared with external observers.
    stats: Arc<HarvestStats>,
}

impl HarvestEngine {
    /// Creates an engine around the given API client.
    #[must_use]
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            stats: Arc::new(HarvestStats::new()),
        }
    }

    /// Returns the shared run statistics for external observers.
    #[must_use]
    pub fn stats(&self) -> Arc<HarvestStats> {
        Arc::clone(&self.stats)
    }

    /// Runs a full harvest: listing fetch plus one detail fetch per entry,
    /// sequentially, in listing order.
    ///
    /// `limit` is the page size requested from the listing endpoint and
    /// must be large enough to cover the whole catalog in one page.
    ///
    /// Fail-soft by design, so this never returns an error: a
    /// listing-level failure (transport error or non-success status alike)
    /// degrades to an empty result, and a per-item failure skips that entry
    /// without retry. Diagnostics for every failure go through `tracing`.
    pub async fn run(&self, limit: u32) -> Vec<PokemonRecord> {
        let entries = match self.client.fetch_listing(limit).await {
            Ok(entries) => entries,
            Err(error) => {
                warn!(error = %error, "listing fetch failed; nothing to harvest");
                return Vec::new();
            }
        };

        self.stats.set_listed(entries.len());
        info!(entries = entries.len(), "catalog listing fetched");

        let mut records = Vec::with_capacity(entries.len());
        for entry in &entries {
            match self.collect_entry(entry).await {
                Ok(record) => {
                    info!(name = %record.name, id = record.id, "collected");
                    records.push(record);
                    self.stats.increment_collected();
                }
                Err(error) => {
                    warn!(name = %entry.name, error = %error, "skipping entry");
                    self.stats.increment_skipped();
                }
            }
        }

        records
    }

    /// Fetches and projects a single entry. An entry either fully succeeds
    /// or contributes nothing to the result.
    async fn collect_entry(&self, entry: &ListingEntry) -> Result<PokemonRecord, FetchError> {
        let detail = self.client.fetch_detail(entry).await?;
        detail
            .project()
            .map_err(|source| FetchError::malformed_record(entry.name.as_str(), source))
    }
}
