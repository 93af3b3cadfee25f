//! # parkhub-service
//!
//! Parking lot business logic for ParkHub.
//!
//! [`ParkingLot`] is the synchronous lot manager that owns the slot
//! sequence. [`ParkingService`] owns one lot behind a single lock so that
//! concurrent handlers observe each operation atomically.

pub mod lot;
pub mod service;

pub use lot::{LotError, ParkingLot, TracingObserver};
pub use service::ParkingService;
