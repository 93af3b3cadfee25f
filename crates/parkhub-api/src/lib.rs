//! # parkhub-api
//!
//! HTTP API layer for ParkHub built on Axum.
//!
//! Provides the parking endpoints, health checks, middleware (logging, CORS,
//! compression), the JSON body extractor, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
