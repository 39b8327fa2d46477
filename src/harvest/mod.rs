//! Sequential catalog harvester with a fail-soft per-item policy.
//!
//! This module provides the [`HarvestEngine`], which coordinates one
//! listing fetch and one detail fetch per listed entry, strictly in listing
//! order, and [`HarvestStats`], the shared counters an observer (the CLI
//! progress spinner) can poll while a run is in flight.
//!
//! # Failure policy
//!
//! Harvesting is best-effort bulk collection. A listing-level failure
//! degrades the run to an empty result; an item-level failure (transport
//! error, non-success status, malformed body or record) is logged and the
//! entry is skipped. No failure aborts the run, and no retry is attempted.
//! The caller can compare the collected count against the listed count to
//! judge completeness.

mod engine;
mod stats;

pub use engine::HarvestEngine;
pub use stats::HarvestStats;
