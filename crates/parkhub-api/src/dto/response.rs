//! Response DTOs.

use serde::{Deserialize, Serialize};

use parkhub_core::types::{LotSummary, SlotNumber};

/// Lot size after initialize or expand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalSlotResponse {
    /// Number of slots in the lot.
    pub total_slot: u32,
}

/// Result of parking a car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocatedSlotResponse {
    /// Slot the car was parked in.
    pub allocated_slot_number: SlotNumber,
}

/// Result of looking up a car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotNumberResponse {
    /// Slot holding the car.
    pub slot_number: SlotNumber,
}

/// Result of clearing a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreedSlotResponse {
    /// Slot that was freed.
    pub freed_slot_number: SlotNumber,
}

/// Occupancy counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Number of slots in the lot.
    pub total_slot: u32,
    /// Slots holding a car.
    pub occupied: u32,
    /// Free slots.
    pub available: u32,
}

impl From<LotSummary> for SummaryResponse {
    fn from(summary: LotSummary) -> Self {
        Self {
            total_slot: summary.total_slots,
            occupied: summary.occupied,
            available: summary.available,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the state was built.
    pub uptime_seconds: u64,
}
