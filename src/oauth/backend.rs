//! Cache provider contract consumed by OAuth clients.

use async_trait::async_trait;
use serde_json::Value;

use crate::cache::{AuthCache, Ttl};

/// Storage an OAuth client needs for flow state and tokens.
///
/// Absent and expired keys are indistinguishable: both read as `None`/`false`.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`. Always succeeds.
    async fn set(&self, key: &str, value: Value, ttl: Ttl) -> bool;

    /// Removes `key`, reporting whether it was stored.
    async fn delete(&self, key: &str) -> bool;

    async fn has(&self, key: &str) -> bool;
}

#[async_trait]
impl CacheBackend for AuthCache<Value> {
    async fn get(&self, key: &str) -> Option<Value> {
        AuthCache::get(self, key).await
    }

    async fn set(&self, key: &str, value: Value, ttl: Ttl) -> bool {
        self.set_with_ttl(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> bool {
        AuthCache::delete(self, key).await
    }

    async fn has(&self, key: &str) -> bool {
        AuthCache::has(self, key).await
    }
}
