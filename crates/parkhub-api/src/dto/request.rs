//! Request DTOs.
//!
//! Every field is optional on the wire. A missing field and an explicit
//! `null` both fall back to a value the lot rejects with its own error kind,
//! so `{}` yields the same response as an explicit bad value.

use serde::{Deserialize, Serialize};

use parkhub_core::types::Car;

/// `POST /parking/parking_lot` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitializeLotRequest {
    /// Number of slots to create.
    #[serde(default)]
    pub no_of_slot: Option<i64>,
}

impl InitializeLotRequest {
    /// Requested slot count, `0` when absent.
    pub fn count(&self) -> i64 {
        self.no_of_slot.unwrap_or_default()
    }
}

/// `PATCH /parking/parking_lot` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpandLotRequest {
    /// Number of slots to append.
    #[serde(default)]
    pub increment_slot: Option<i64>,
}

impl ExpandLotRequest {
    /// Requested increment, `0` when absent.
    pub fn count(&self) -> i64 {
        self.increment_slot.unwrap_or_default()
    }
}

/// `POST /parking/park` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParkCarRequest {
    /// Registration number.
    #[serde(default)]
    pub car_reg_no: Option<String>,
    /// Color.
    #[serde(default)]
    pub car_color: Option<String>,
}

impl From<ParkCarRequest> for Car {
    fn from(req: ParkCarRequest) -> Self {
        Car::new(
            req.car_reg_no.unwrap_or_default(),
            req.car_color.unwrap_or_default(),
        )
    }
}

/// `POST /parking/clear` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearSlotRequest {
    /// Slot to free. Takes priority over the registration number.
    #[serde(default)]
    pub slot_number: Option<i64>,
    /// Registration number of the car to remove.
    #[serde(default)]
    pub car_registration_no: Option<String>,
}
