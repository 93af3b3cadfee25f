//! Route definitions for the ParkHub HTTP API.
//!
//! Parking endpoints are mounted under `/parking`; the health check lives at
//! the root. The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/parking", parking_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Lot lifecycle, allocation, queries and release
fn parking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/parking_lot",
            post(handlers::parking::initialize_lot).patch(handlers::parking::expand_lot),
        )
        .route("/park", post(handlers::parking::park_car))
        .route("/clear", post(handlers::parking::clear_slot))
        .route(
            "/registration_numbers/{color}",
            get(handlers::parking::registration_numbers_by_color),
        )
        .route(
            "/slot_numbers/{color}",
            get(handlers::parking::slot_numbers_by_color),
        )
        .route(
            "/slots/{registration_number}",
            get(handlers::parking::slot_by_registration),
        )
        .route("/status", get(handlers::parking::status))
        .route("/summary", get(handlers::parking::summary))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
