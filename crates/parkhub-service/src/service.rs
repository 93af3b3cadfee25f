//! Concurrency-safe parking service.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use parkhub_core::config::LotConfig;
use parkhub_core::result::AppResult;
use parkhub_core::traits::LotObserver;
use parkhub_core::types::{Car, ColorQuery, LotSummary, ParkedCar, ReleaseTarget, SlotNumber};

use crate::lot::{ParkingLot, TracingObserver};

/// Owns one [`ParkingLot`] behind a single Tokio mutex.
///
/// Every operation holds the lock for its whole read-check-write sequence,
/// so two concurrent allocations can never claim the same slot. Lot errors
/// are converted into [`AppError`](parkhub_core::AppError) here.
#[derive(Debug, Clone)]
pub struct ParkingService {
    lot: Arc<Mutex<ParkingLot>>,
}

impl Default for ParkingService {
    fn default() -> Self {
        Self::new(ParkingLot::new())
    }
}

impl ParkingService {
    /// Wraps an existing lot.
    pub fn new(lot: ParkingLot) -> Self {
        Self {
            lot: Arc::new(Mutex::new(lot)),
        }
    }

    /// Builds the service from configuration, reporting to `observer`.
    ///
    /// When `initial_slots` is non-zero the lot is initialized with it.
    pub fn from_config(config: &LotConfig, observer: Arc<dyn LotObserver>) -> AppResult<Self> {
        let mut lot = ParkingLot::with_observer(observer).with_max_slots(config.max_slots);
        if config.initial_slots > 0 {
            lot.initialize(i64::from(config.initial_slots))?;
        }
        Ok(Self::new(lot))
    }

    /// Same as [`from_config`](Self::from_config) with a [`TracingObserver`].
    pub fn with_tracing(config: &LotConfig) -> AppResult<Self> {
        Self::from_config(config, Arc::new(TracingObserver))
    }

    /// Resets the lot to `count` empty slots.
    pub async fn initialize(&self, count: i64) -> AppResult<u32> {
        debug!(count = count, "Initializing parking lot");
        Ok(self.lot.lock().await.initialize(count)?)
    }

    /// Appends `count` empty slots.
    pub async fn expand(&self, count: i64) -> AppResult<u32> {
        debug!(count = count, "Expanding parking lot");
        Ok(self.lot.lock().await.expand(count)?)
    }

    /// Parks a car in the nearest free slot.
    pub async fn park(&self, car: Car) -> AppResult<SlotNumber> {
        Ok(self.lot.lock().await.allocate(car)?)
    }

    /// Frees a slot, by slot number if given, else by registration number.
    pub async fn clear(
        &self,
        slot_number: Option<i64>,
        registration_number: Option<String>,
    ) -> AppResult<SlotNumber> {
        let target = ReleaseTarget::from_parts(slot_number, registration_number);
        Ok(self.lot.lock().await.release(target)?)
    }

    /// Registration numbers of cars with the given color.
    pub async fn registration_numbers_by_color(&self, color: &str) -> AppResult<Vec<String>> {
        Ok(self
            .lot
            .lock()
            .await
            .query_by_color(color, ColorQuery::RegistrationNumbers)?)
    }

    /// Slot numbers of cars with the given color.
    pub async fn slot_numbers_by_color(&self, color: &str) -> AppResult<Vec<String>> {
        Ok(self
            .lot
            .lock()
            .await
            .query_by_color(color, ColorQuery::SlotNumbers)?)
    }

    /// Slot of the car with this registration number.
    pub async fn slot_by_registration(&self, registration_number: &str) -> AppResult<SlotNumber> {
        Ok(self.lot.lock().await.find_slot_by_car(registration_number)?)
    }

    /// All parked cars in slot order.
    pub async fn status(&self) -> AppResult<Vec<ParkedCar>> {
        Ok(self.lot.lock().await.status()?)
    }

    /// Occupancy counters.
    pub async fn summary(&self) -> LotSummary {
        self.lot.lock().await.summary()
    }
}
