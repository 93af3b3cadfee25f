//! Parking slot.

use serde::{Deserialize, Serialize};

use super::car::Car;

/// One-based slot number. Assigned once at creation and never changed.
pub type SlotNumber = u32;

/// A numbered parking space. Occupancy is the presence of a car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Position in the lot, starting at 1.
    pub slot_number: SlotNumber,
    /// The car parked here, if any.
    pub car: Option<Car>,
}

impl Slot {
    /// Creates an empty slot.
    pub fn empty(slot_number: SlotNumber) -> Self {
        Self {
            slot_number,
            car: None,
        }
    }

    /// Whether a car is parked in this slot.
    pub fn is_occupied(&self) -> bool {
        self.car.is_some()
    }
}
