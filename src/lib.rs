//! Auth Cache - an in-process expiring cache for OAuth/OIDC flows
//!
//! Stores handshake state and tokens between the requests of a login flow,
//! with lazy TTL expiration and size-triggered eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod oauth;

pub use api::AppState;
pub use cache::{AuthCache, ExpiringCache, Ttl};
pub use config::Config;
pub use error::CacheError;
pub use oauth::{CacheBackend, OAuthFlowCache};
