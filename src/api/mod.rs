//! HTTP API layer for Beacon.
//!
//! Provides the four read-only JSON endpoints and the not-found fallback.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
