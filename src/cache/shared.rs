//! Shared Cache Handle
//!
//! Cloneable async handle that serializes access to one [`ExpiringCache`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, ExpiringCache, Ttl};

// == Auth Cache ==
/// Thread-safe handle to a single expiring cache.
///
/// Every clone points at the same store. Each operation takes the lock once
/// and runs a short synchronous critical section, so a `has` and a `get` never
/// observe a half-applied `set` or eviction pass.
pub struct AuthCache<V> {
    inner: Arc<RwLock<ExpiringCache<V>>>,
}

impl<V> AuthCache<V> {
    /// Creates a handle over a fresh cache.
    pub fn new(threshold: usize, default_ttl: Duration) -> Self {
        Self::from_store(ExpiringCache::new(threshold, default_ttl))
    }

    /// Wraps an existing store.
    pub fn from_store(store: ExpiringCache<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn set(&self, key: impl Into<String>, value: V) -> bool {
        self.inner.write().await.set(key, value)
    }

    pub async fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Ttl) -> bool {
        self.inner.write().await.set_with_ttl(key, value, ttl)
    }

    pub async fn has(&self, key: &str) -> bool {
        self.inner.read().await.has(key)
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.inner.write().await.delete(key)
    }

    /// Empties the cache, returning how many entries were dropped.
    pub async fn clear(&self) -> usize {
        self.inner.write().await.clear()
    }

    pub async fn ttl_remaining(&self, key: &str) -> Option<Option<Duration>> {
        self.inner.read().await.ttl_remaining(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }
}

impl<V: Clone> AuthCache<V> {
    /// Retrieves a live value. Takes the write lock because reads update stats.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.write().await.get(key)
    }
}

impl<V> Clone for AuthCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for AuthCache<V> {
    fn default() -> Self {
        Self::from_store(ExpiringCache::default())
    }
}

impl<V> fmt::Debug for AuthCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCache").finish_non_exhaustive()
    }
}
