//! Cache Store Module
//!
//! Insertion-ordered storage with lazy TTL expiration and a size-triggered
//! eviction pass.

use std::time::Duration;

use indexmap::IndexMap;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, Ttl, DEFAULT_TTL, DEFAULT_THRESHOLD};

// == Expiring Cache ==
/// Bounded key-value store whose entries may carry an absolute expiration.
///
/// Expired entries are never removed on read. They stay in storage, and keep
/// counting towards [`ExpiringCache::len`], until an eviction pass, a delete or
/// a clear drops them.
///
/// The eviction pass runs at the start of `set` whenever the store holds more
/// than `threshold` entries. It removes every expired entry plus every entry
/// whose insertion index is a multiple of three, live or not. This is a cheap
/// way to keep the size near the threshold and is not an LRU policy.
#[derive(Debug)]
pub struct ExpiringCache<V> {
    /// Key-value storage in insertion order
    entries: IndexMap<String, CacheEntry<V>>,
    /// Read and eviction counters
    stats: CacheStats,
    /// Size above which `set` runs an eviction pass
    threshold: usize,
    /// Lifetime applied by `Ttl::Default`, None = never expires
    default_ttl: Option<Duration>,
}

impl<V> ExpiringCache<V> {
    // == Constructor ==
    /// Creates a new cache.
    ///
    /// # Arguments
    /// * `threshold` - Entry count above which `set` prunes the store
    /// * `default_ttl` - Lifetime for entries stored with `Ttl::Default`; zero means never
    pub fn new(threshold: usize, default_ttl: Duration) -> Self {
        Self {
            entries: IndexMap::new(),
            stats: CacheStats::new(),
            threshold,
            default_ttl: (!default_ttl.is_zero()).then_some(default_ttl),
        }
    }

    // == Set ==
    /// Stores a value under `key` with the default TTL.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> bool {
        self.set_with_ttl(key, value, Ttl::Default)
    }

    // == Set With TTL ==
    /// Stores a value under `key`, replacing both value and expiration of any
    /// previous entry. An overwritten key keeps its insertion position.
    ///
    /// Always returns `true`.
    pub fn set_with_ttl(&mut self, key: impl Into<String>, value: V, ttl: Ttl) -> bool {
        let key = key.into();
        let now = Instant::now();
        let lifetime = ttl.resolve(self.default_ttl);

        self.prune(now);

        trace!(key = %key, ?lifetime, "storing entry");
        self.entries
            .insert(key, CacheEntry::new(value, lifetime, now));
        true
    }

    // == Has ==
    /// Returns true if `key` holds a live entry.
    pub fn has(&self, key: &str) -> bool {
        let now = Instant::now();
        self.entries
            .get(key)
            .is_some_and(|entry| entry.is_live_at(now))
    }

    // == Delete ==
    /// Removes an entry by key, expired or not.
    ///
    /// Returns whether an entry was stored under `key`.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry regardless of expiration. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    // == Remaining TTL ==
    /// Returns the remaining lifetime of a live entry.
    ///
    /// `Some(None)` means the entry never expires, `None` means nothing live is stored.
    pub fn ttl_remaining(&self, key: &str) -> Option<Option<Duration>> {
        let now = Instant::now();
        self.entries
            .get(key)
            .filter(|entry| entry.is_live_at(now))
            .map(|entry| entry.ttl_remaining(now))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Accessors ==
    /// Entry count above which `set` runs an eviction pass.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Lifetime used by `Ttl::Default`, None = never expires.
    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    // == Eviction Pass ==
    /// Drops expired entries and every third entry by insertion index, but only
    /// once the store has grown past the threshold.
    fn prune(&mut self, now: Instant) {
        if self.entries.len() <= self.threshold {
            return;
        }

        let before = self.entries.len();
        let mut index = 0usize;
        self.entries.retain(|_, entry| {
            let evict = entry.is_expired_at(now) || index % 3 == 0;
            index += 1;
            !evict
        });

        let removed = before - self.entries.len();
        self.stats.record_prune(removed);
        debug!(
            removed,
            remaining = self.entries.len(),
            threshold = self.threshold,
            "eviction pass complete"
        );
    }
}

impl<V: Clone> ExpiringCache<V> {
    // == Get ==
    /// Retrieves a clone of the value stored under `key` if it is still live.
    ///
    /// Never-set, deleted and expired keys all return None. Expired entries
    /// are left in place.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = Instant::now();
        match self.entries.get(key) {
            Some(entry) if entry.is_live_at(now) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }
}

impl<V> Default for ExpiringCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_TTL)
    }
}
