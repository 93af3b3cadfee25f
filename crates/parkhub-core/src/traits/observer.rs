//! Lot lifecycle observer.

use crate::types::{Car, SlotNumber};

/// Side channel notified after every lot operation.
///
/// Observers carry no semantic contract: the lot behaves identically whatever
/// they do, and every method defaults to a no-op. Implementations must not
/// block, since they run while the lot is locked.
pub trait LotObserver: Send + Sync + 'static {
    /// The lot was reset to `total_slots` empty slots.
    fn lot_initialized(&self, _total_slots: u32) {}

    /// `added` empty slots were appended, giving `total_slots`.
    fn lot_expanded(&self, _added: u32, _total_slots: u32) {}

    /// `car` now occupies `slot`.
    fn car_parked(&self, _slot: SlotNumber, _car: &Car) {}

    /// `car` left `slot`.
    fn slot_released(&self, _slot: SlotNumber, _car: &Car) {}

    /// `operation` failed without touching the lot.
    fn operation_rejected(&self, _operation: &'static str, _error: &dyn std::error::Error) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LotObserver for NoopObserver {}
