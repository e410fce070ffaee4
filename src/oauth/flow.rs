//! Typed flow-state and token helpers on top of a [`CacheBackend`].

use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{CacheBackend, FLOW_STATE_TTL, STATE_KEY_PREFIX, TOKEN_KEY_PREFIX};
use crate::cache::Ttl;
use crate::error::{CacheError, Result};

/// Data stashed between the authorization redirect and its callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowState {
    pub state: String,
    /// PKCE code verifier
    pub code_verifier: String,
    pub redirect_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// Tokens issued at the end of a login flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds as reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// OIDC claims, kept as returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo: Option<Value>,
}

impl TokenSet {
    /// Cache lifetime matching the provider's `expires_in`, or the cache default.
    fn ttl(&self) -> Ttl {
        match self.expires_in {
            Some(secs) if secs > 0 => Ttl::After(Duration::from_secs(secs)),
            _ => Ttl::Default,
        }
    }
}

// == OAuth Flow Cache ==
/// Stores pending login flows and issued tokens in a cache backend.
///
/// Flow state is one-shot: [`OAuthFlowCache::complete`] consumes it, so a
/// replayed callback finds nothing.
#[derive(Debug, Clone)]
pub struct OAuthFlowCache<B> {
    backend: B,
}

impl<B: CacheBackend> OAuthFlowCache<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state_key(state: &str) -> String {
        format!("{STATE_KEY_PREFIX}{state}")
    }

    pub fn token_key(user: &str) -> String {
        format!("{TOKEN_KEY_PREFIX}{user}")
    }

    // == Begin ==
    /// Stashes the state of a login flow that was just redirected to the provider.
    ///
    /// Returns the cache key it was stored under.
    pub async fn begin(&self, flow: &FlowState) -> Result<String> {
        let key = Self::state_key(&flow.state);
        let value = encode(&key, flow)?;
        self.backend
            .set(&key, value, Ttl::After(FLOW_STATE_TTL))
            .await;
        debug!(key = %key, "login flow started");
        Ok(key)
    }

    /// Whether a flow with this state is still waiting for its callback.
    pub async fn has_pending(&self, state: &str) -> bool {
        self.backend.has(&Self::state_key(state)).await
    }

    // == Complete ==
    /// Consumes the stashed state for a callback.
    ///
    /// Unknown, expired and already-consumed states all yield `NotFound`.
    pub async fn complete(&self, state: &str) -> Result<FlowState> {
        let key = Self::state_key(state);
        let Some(value) = self.backend.get(&key).await else {
            warn!(key = %key, "login callback with unknown or expired state");
            return Err(CacheError::NotFound(key));
        };
        // Only the caller whose delete removed the entry may use it
        if !self.backend.delete(&key).await {
            warn!(key = %key, "login state consumed by a concurrent callback");
            return Err(CacheError::NotFound(key));
        }

        decode(&key, value)
    }

    // == Tokens ==
    /// Caches the tokens issued to `user`, expiring with the access token.
    pub async fn store_tokens(&self, user: &str, tokens: &TokenSet) -> Result<()> {
        let key = Self::token_key(user);
        let value = encode(&key, tokens)?;
        self.backend.set(&key, value, tokens.ttl()).await;
        Ok(())
    }

    pub async fn tokens(&self, user: &str) -> Result<Option<TokenSet>> {
        let key = Self::token_key(user);
        match self.backend.get(&key).await {
            Some(value) => decode(&key, value).map(Some),
            None => Ok(None),
        }
    }

    /// Drops cached tokens for `user`, reporting whether any were stored.
    pub async fn revoke_tokens(&self, user: &str) -> bool {
        self.backend.delete(&Self::token_key(user)).await
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|source| CacheError::MalformedEntry {
        key: key.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| {
        warn!(key = %key, "cached OAuth entry has unexpected shape");
        CacheError::MalformedEntry {
            key: key.to_string(),
            source,
        }
    })
}
