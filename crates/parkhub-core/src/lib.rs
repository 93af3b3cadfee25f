//! # parkhub-core
//!
//! Core crate for ParkHub. Contains configuration schemas, the parking
//! domain types, the lot observer trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ParkHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
