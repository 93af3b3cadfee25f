//! Structured-logging lot observer.

use tracing::{info, warn};

use parkhub_core::traits::LotObserver;
use parkhub_core::types::{Car, SlotNumber};

/// Reports every lot event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LotObserver for TracingObserver {
    fn lot_initialized(&self, total_slots: u32) {
        info!(total_slots = total_slots, "Parking lot initialized");
    }

    fn lot_expanded(&self, added: u32, total_slots: u32) {
        info!(
            added = added,
            total_slots = total_slots,
            "Parking lot expanded"
        );
    }

    fn car_parked(&self, slot: SlotNumber, car: &Car) {
        info!(
            slot = slot,
            registration_number = %car.registration_number,
            color = %car.color,
            "Car parked"
        );
    }

    fn slot_released(&self, slot: SlotNumber, car: &Car) {
        info!(
            slot = slot,
            registration_number = %car.registration_number,
            "Slot released"
        );
    }

    fn operation_rejected(&self, operation: &'static str, error: &dyn std::error::Error) {
        warn!(operation = operation, error = %error, "Lot operation rejected");
    }
}
