//! Shared counters for observing a harvest run.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Statistics from a harvest run.
///
/// The harvest loop is the single writer; a progress observer may read the
/// counters concurrently from another task, so they are atomics.
#[derive(Debug, Default)]
pub struct HarvestStats {
    listed: AtomicUsize,
    collected: AtomicUsize,
    skipped: AtomicUsize,
}

impl HarvestStats {
    /// Creates a new stats tracker with zero counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries the listing call returned.
    ///
    /// Zero until the listing resolves, and zero for the whole run when the
    /// listing call fails.
    #[must_use]
    pub fn listed(&self) -> usize {
        self.listed.load(Ordering::SeqCst)
    }

    /// Returns the number of entries collected into records so far.
    #[must_use]
    pub fn collected(&self) -> usize {
        self.collected.load(Ordering::SeqCst)
    }

    /// Returns the number of entries skipped after a failure so far.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::SeqCst)
    }

    /// Returns the number of entries processed so far (collected + skipped).
    #[must_use]
    pub fn processed(&self) -> usize {
        self.collected() + self.skipped()
    }

    /// Records the listing length, once, when the listing resolves.
    pub(crate) fn set_listed(&self, count: usize) {
        self.listed.store(count, Ordering::SeqCst);
    }

    /// Increments the collected counter.
    pub(crate) fn increment_collected(&self) {
        self.collected.fetch_add(1, Ordering::SeqCst);
    }

    /// Increments the skipped counter.
    pub(crate) fn increment_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }
}
