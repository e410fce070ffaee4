//! API Module
//!
//! HTTP handlers and routing that expose the auth cache for local diagnostics.
//!
//! # Endpoints
//! - `PUT /set` - Store a JSON value with optional TTL
//! - `GET /get/:key` - Retrieve a live value
//! - `GET /has/:key` - Probe for a live value
//! - `DELETE /del/:key` - Delete a key
//! - `POST /clear` - Drop every entry
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
