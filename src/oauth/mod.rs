//! OAuth Integration Module
//!
//! Lets an OAuth/OIDC client use the auth cache as its state and token store.
//!
//! - [`CacheBackend`]: the get/set/delete/has provider contract
//! - [`OAuthFlowCache`]: typed helpers for one-shot flow state and token sets

mod backend;
mod flow;

use std::time::Duration;

pub use backend::CacheBackend;
pub use flow::{FlowState, OAuthFlowCache, TokenSet};

/// Key prefix for pending authorization flow state
pub const STATE_KEY_PREFIX: &str = "oauth_state_";

/// Key prefix for issued token sets
pub const TOKEN_KEY_PREFIX: &str = "access_token_";

/// How long a started login flow waits for its callback
pub const FLOW_STATE_TTL: Duration = Duration::from_secs(600);
