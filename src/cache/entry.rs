//! Cache Entry Module
//!
//! Defines a single cached value together with its optional expiration instant.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with value and expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute expiration instant, None = never expires
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` after `now`.
    ///
    /// A `None` TTL, or one that would overflow the instant range, never expires.
    pub fn new(value: V, ttl: Option<Duration>, now: Instant) -> Self {
        Self {
            value,
            expires_at: ttl.and_then(|ttl| now.checked_add(ttl)),
        }
    }

    // == Is Live ==
    /// Checks whether the entry is still readable at `now`.
    ///
    /// An entry is live when it never expires or its expiration lies strictly
    /// after `now`.
    pub fn is_live_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => expires > now,
            None => true,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has a finite expiration at or before `now`.
    ///
    /// This is the exact complement of [`CacheEntry::is_live_at`].
    pub fn is_expired_at(&self, now: Instant) -> bool {
        !self.is_live_at(now)
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or None if the entry never expires.
    ///
    /// Expired entries report `Some(Duration::ZERO)`.
    pub fn ttl_remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}
