//! Convenience result type alias for ParkHub.

use crate::error::AppError;

/// A specialized `Result` type for ParkHub operations that cross the
/// application boundary.
pub type AppResult<T> = Result<T, AppError>;
