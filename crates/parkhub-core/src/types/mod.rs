//! Core parking domain types used across the ParkHub workspace.

pub mod car;
pub mod query;
pub mod slot;
pub mod status;

pub use car::Car;
pub use query::{ColorQuery, ReleaseTarget};
pub use slot::{Slot, SlotNumber};
pub use status::{LotSummary, ParkedCar};
