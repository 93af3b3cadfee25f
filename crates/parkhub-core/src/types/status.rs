//! Lot status snapshots.

use serde::{Deserialize, Serialize};

use super::slot::SlotNumber;

/// One occupied slot as reported by the status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkedCar {
    /// Slot number.
    pub slot_no: SlotNumber,
    /// Registration number of the parked car.
    pub registration_no: String,
    /// Color of the parked car.
    pub color: String,
}

/// Occupancy counters for the whole lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSummary {
    /// Number of slots in the lot.
    pub total_slots: u32,
    /// Number of slots holding a car.
    pub occupied: u32,
    /// Number of free slots.
    pub available: u32,
}
