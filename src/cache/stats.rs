//! Cache Statistics Module
//!
//! Tracks cache metrics: read hits and misses, and what the eviction pass removed.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of reads that returned a live value
    pub hits: u64,
    /// Number of reads that found nothing live (never set, deleted or expired)
    pub misses: u64,
    /// Number of entries removed by eviction passes
    pub evictions: u64,
    /// Number of eviction passes run
    pub prune_passes: u64,
    /// Current number of physically stored entries
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Prune ==
    /// Records one eviction pass that removed `removed` entries.
    pub fn record_prune(&mut self, removed: usize) {
        self.prune_passes += 1;
        self.evictions += removed as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
