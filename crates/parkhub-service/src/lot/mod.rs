//! The lot manager and its error and observer types.

pub mod error;
pub mod manager;
pub mod observer;

pub use error::LotError;
pub use manager::ParkingLot;
pub use observer::TracingObserver;
