//! Cache Module
//!
//! In-memory expiring cache with lazy TTL expiration and size-triggered eviction.

mod entry;
mod shared;
mod stats;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use shared::AuthCache;
pub use stats::CacheStats;
pub use store::ExpiringCache;
pub use ttl::Ttl;

// == Public Constants ==
/// Entry count above which `set` runs an eviction pass
pub const DEFAULT_THRESHOLD: usize = 500;

/// Lifetime given to entries stored without an explicit TTL
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Maximum key length accepted by the HTTP surface, in bytes
pub const MAX_KEY_LENGTH: usize = 256;
