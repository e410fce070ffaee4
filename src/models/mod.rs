//! Request and Response models for the cache service API
//!
//! DTOs used to serialize and deserialize HTTP request and response bodies.
//! Cached values are arbitrary JSON.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SetRequest;
pub use responses::{
    ClearResponse, DeleteResponse, GetResponse, HasResponse, HealthResponse, SetResponse,
    StatsResponse,
};
