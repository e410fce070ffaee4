//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::AuthCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HasResponse, HealthResponse, SetRequest,
    SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds a handle to the one cache built at startup; clones share storage.
#[derive(Clone, Debug)]
pub struct AppState {
    pub cache: AuthCache<Value>,
}

impl AppState {
    pub fn new(cache: AuthCache<Value>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(AuthCache::new(config.threshold, config.default_ttl))
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl();
    state.cache.set_with_ttl(req.key.clone(), req.value, ttl).await;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Expired and never-set keys are both reported as 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(&key)
        .await
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /has/:key
pub async fn has_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<HasResponse> {
    let present = state.cache.has(&key).await;
    Json(HasResponse::new(key, present))
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if !state.cache.delete(&key).await {
        return Err(CacheError::NotFound(key));
    }

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.clear().await;
    info!("Cache cleared: {} entries dropped", cleared);
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
