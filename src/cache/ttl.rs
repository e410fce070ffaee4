//! Time-To-Live Module
//!
//! How long a `set` should keep its entry alive.

use std::time::Duration;

// == Ttl ==
/// Expiration policy requested for a single `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ttl {
    /// Use the cache's configured default TTL
    #[default]
    Default,
    /// Keep the entry until it is deleted, cleared or evicted
    Never,
    /// Expire the entry after the given duration (zero means never)
    After(Duration),
}

impl Ttl {
    /// Builds a TTL from fractional seconds.
    ///
    /// Non-positive, NaN, infinite or unrepresentable values all mean `Never`.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs > 0.0 {
            Duration::try_from_secs_f64(secs).map_or(Ttl::Never, Ttl::After)
        } else {
            Ttl::Never
        }
    }

    /// Resolves this policy into a concrete lifetime, None = never expires.
    pub fn resolve(self, default_ttl: Option<Duration>) -> Option<Duration> {
        match self {
            Ttl::Default => default_ttl,
            Ttl::Never => None,
            Ttl::After(ttl) if ttl.is_zero() => None,
            Ttl::After(ttl) => Some(ttl),
        }
    }
}

impl From<Duration> for Ttl {
    fn from(ttl: Duration) -> Self {
        Ttl::After(ttl)
    }
}

impl From<Option<Duration>> for Ttl {
    fn from(ttl: Option<Duration>) -> Self {
        ttl.map_or(Ttl::Default, Ttl::After)
    }
}
