//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use parkhub_core::config::AppConfig;
use parkhub_service::ParkingService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The single parking lot owner
    pub parking_service: Arc<ParkingService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Creates state around an already-built parking service.
    pub fn new(config: AppConfig, parking_service: ParkingService) -> Self {
        Self {
            config: Arc::new(config),
            parking_service: Arc::new(parking_service),
            started_at: Instant::now(),
        }
    }
}
