//! Configuration Module
//!
//! Loads cache and server settings from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::cache::{Ttl, DEFAULT_THRESHOLD, DEFAULT_TTL};

/// Cache and server configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entry count above which writes trigger an eviction pass
    pub threshold: usize,
    /// Lifetime for entries stored without explicit TTL (zero = never expire)
    pub default_ttl: Duration,
    /// HTTP bind address
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `AUTH_CACHE_THRESHOLD` - Eviction threshold (default: 500)
    /// - `AUTH_CACHE_DEFAULT_TTL` - Default TTL in seconds, fractional allowed,
    ///   `<= 0` means never expire (default: 300)
    /// - `SERVER_HOST` - HTTP bind address (default: 127.0.0.1)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            threshold: env_parse("AUTH_CACHE_THRESHOLD").unwrap_or(defaults.threshold),
            default_ttl: env_parse::<f64>("AUTH_CACHE_DEFAULT_TTL")
                .map(ttl_from_secs)
                .unwrap_or(defaults.default_ttl),
            server_host: env_parse("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env_parse("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            default_ttl: DEFAULT_TTL,
            server_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            server_port: 3000,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Non-positive or unrepresentable seconds collapse to zero, i.e. never expire.
fn ttl_from_secs(secs: f64) -> Duration {
    match Ttl::from_secs_f64(secs) {
        Ttl::After(ttl) => ttl,
        _ => Duration::ZERO,
    }
}
