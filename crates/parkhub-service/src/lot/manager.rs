//! Slot allocation and query engine for a single parking lot.

use std::collections::HashMap;
use std::sync::Arc;

use parkhub_core::traits::{LotObserver, NoopObserver};
use parkhub_core::types::{
    Car, ColorQuery, LotSummary, ParkedCar, ReleaseTarget, Slot, SlotNumber,
};

use super::error::LotError;

/// Upper bound on the number of slots a lot may hold.
pub const DEFAULT_MAX_SLOTS: u32 = 1_000_000;

/// A single parking lot: an ordered, growable sequence of numbered slots.
///
/// Slot `n` always lives at index `n - 1`. Slots are only ever appended, so
/// numbering stays contiguous from 1 and a slot keeps its number for the
/// lifetime of the lot (until the next [`initialize`](Self::initialize)).
///
/// Allocation always takes the lowest-numbered free slot.
pub struct ParkingLot {
    slots: Vec<Slot>,
    /// Registration number to the slot holding that car.
    parked: HashMap<String, SlotNumber>,
    max_slots: u32,
    observer: Arc<dyn LotObserver>,
}

impl std::fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParkingLot")
            .field("total_slots", &self.total_slots())
            .field("occupied", &self.parked.len())
            .field("max_slots", &self.max_slots)
            .finish()
    }
}

impl Default for ParkingLot {
    fn default() -> Self {
        Self::new()
    }
}

impl ParkingLot {
    /// Creates an empty lot with zero slots and no observer.
    pub fn new() -> Self {
        Self::with_observer(Arc::new(NoopObserver))
    }

    /// Creates an empty lot that reports to `observer`.
    pub fn with_observer(observer: Arc<dyn LotObserver>) -> Self {
        Self {
            slots: Vec::new(),
            parked: HashMap::new(),
            max_slots: DEFAULT_MAX_SLOTS,
            observer,
        }
    }

    /// Caps the number of slots initialize and expand may create.
    pub fn with_max_slots(mut self, max_slots: u32) -> Self {
        self.max_slots = max_slots;
        self
    }

    /// Number of slots in the lot.
    pub fn total_slots(&self) -> u32 {
        self.slots.len() as u32
    }

    /// All slots in ascending slot-number order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Replaces the lot with `count` empty slots numbered `1..=count`.
    ///
    /// Any parked cars are discarded. Returns the new total.
    pub fn initialize(&mut self, count: i64) -> Result<u32, LotError> {
        let count = match self.checked_count(count, 0, "Number of slots must be greater than 0") {
            Ok(count) => count,
            Err(err) => return self.reject("initialize", err),
        };

        self.slots = (1..=count).map(Slot::empty).collect();
        self.parked.clear();

        self.observer.lot_initialized(count);
        Ok(count)
    }

    /// Appends `count` empty slots after the current last slot.
    ///
    /// Existing slots keep their numbers and occupancy. Returns the new total.
    pub fn expand(&mut self, count: i64) -> Result<u32, LotError> {
        let current = self.total_slots();
        let non_positive = "Increment slots must be greater than 0";
        let added = match self.checked_count(count, current, non_positive) {
            Ok(added) => added,
            Err(err) => return self.reject("expand", err),
        };

        let total = current + added;
        self.slots.extend((current + 1..=total).map(Slot::empty));

        self.observer.lot_expanded(added, total);
        Ok(total)
    }

    /// Parks `car` in the lowest-numbered free slot and returns that slot.
    pub fn allocate(&mut self, car: Car) -> Result<SlotNumber, LotError> {
        if !car.is_complete() {
            return self.reject("allocate", LotError::InvalidInput);
        }
        if self.parked.contains_key(&car.registration_number) {
            return self.reject("allocate", LotError::AlreadyParked);
        }
        let Some(index) = self.slots.iter().position(|slot| !slot.is_occupied()) else {
            return self.reject("allocate", LotError::LotFull);
        };

        let slot = &mut self.slots[index];
        self.parked
            .insert(car.registration_number.clone(), slot.slot_number);
        self.observer.car_parked(slot.slot_number, &car);
        slot.car = Some(car);

        Ok(slot.slot_number)
    }

    /// Frees the slot identified by `target` and returns its number.
    ///
    /// `None` means the caller supplied no usable identifier.
    pub fn release(&mut self, target: Option<ReleaseTarget>) -> Result<SlotNumber, LotError> {
        let index = match self.resolve_release(target) {
            Ok(index) => index,
            Err(err) => return self.reject("release", err),
        };

        let slot = &mut self.slots[index];
        if let Some(car) = slot.car.take() {
            self.parked.remove(&car.registration_number);
            self.observer.slot_released(slot.slot_number, &car);
        }

        Ok(slot.slot_number)
    }

    /// Occupied slots whose car color matches `color`, ignoring case.
    ///
    /// Results are in ascending slot order. An empty result is an error.
    pub fn query_by_color(&self, color: &str, mode: ColorQuery) -> Result<Vec<String>, LotError> {
        let matches: Vec<String> = self
            .occupied()
            .filter(|(_, car)| car.has_color(color))
            .map(|(slot_number, car)| match mode {
                ColorQuery::RegistrationNumbers => car.registration_number.clone(),
                ColorQuery::SlotNumbers => slot_number.to_string(),
            })
            .collect();

        if matches.is_empty() {
            return self.reject(
                "query_by_color",
                LotError::NotFound {
                    mode,
                    color: color.to_string(),
                },
            );
        }
        Ok(matches)
    }

    /// The slot holding the car with exactly this registration number.
    pub fn find_slot_by_car(&self, registration_number: &str) -> Result<SlotNumber, LotError> {
        match self.parked.get(registration_number) {
            Some(slot_number) => Ok(*slot_number),
            None => self.reject(
                "find_slot_by_car",
                LotError::CarNotFound(registration_number.to_string()),
            ),
        }
    }

    /// Every parked car in ascending slot order. An empty lot is an error.
    pub fn status(&self) -> Result<Vec<ParkedCar>, LotError> {
        let parked: Vec<ParkedCar> = self
            .occupied()
            .map(|(slot_no, car)| ParkedCar {
                slot_no,
                registration_no: car.registration_number.clone(),
                color: car.color.clone(),
            })
            .collect();

        if parked.is_empty() {
            return self.reject("status", LotError::EmptyLot);
        }
        Ok(parked)
    }

    /// Occupancy counters. Valid for any lot, including an empty one.
    pub fn summary(&self) -> LotSummary {
        let total_slots = self.total_slots();
        let occupied = self.parked.len() as u32;
        LotSummary {
            total_slots,
            occupied,
            available: total_slots - occupied,
        }
    }

    fn occupied(&self) -> impl Iterator<Item = (SlotNumber, &Car)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.car.as_ref().map(|car| (slot.slot_number, car)))
    }

    /// Validates a requested slot count against the lot's capacity.
    fn checked_count(&self, count: i64, current: u32, non_positive: &str) -> Result<u32, LotError> {
        if count <= 0 {
            return Err(LotError::InvalidSlotCount(non_positive.to_string()));
        }
        let room = self.max_slots.saturating_sub(current);
        match u32::try_from(count) {
            Ok(count) if count <= room => Ok(count),
            _ => Err(LotError::InvalidSlotCount(format!(
                "Number of slots exceeds the maximum lot size of {}",
                self.max_slots
            ))),
        }
    }

    fn resolve_release(&self, target: Option<ReleaseTarget>) -> Result<usize, LotError> {
        match target {
            None => Err(LotError::MissingIdentifier),
            Some(target @ ReleaseTarget::Slot(requested)) => {
                let index = target
                    .slot_number()
                    .filter(|n| (1..=self.total_slots()).contains(n))
                    .map(|n| (n - 1) as usize)
                    .ok_or(LotError::SlotNotFound(requested))?;
                if !self.slots[index].is_occupied() {
                    return Err(LotError::SlotAlreadyEmpty(self.slots[index].slot_number));
                }
                Ok(index)
            }
            Some(ReleaseTarget::Registration(registration)) => self
                .parked
                .get(&registration)
                .map(|slot_number| (*slot_number - 1) as usize)
                .ok_or(LotError::CarNotFound(registration)),
        }
    }

    fn reject<T>(&self, operation: &'static str, err: LotError) -> Result<T, LotError> {
        self.observer.operation_rejected(operation, &err);
        Err(err)
    }
}
