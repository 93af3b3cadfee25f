//! Lot-level failure taxonomy.

use parkhub_core::error::AppError;
use parkhub_core::types::{ColorQuery, SlotNumber};
use thiserror::Error;

/// Every way a lot operation can fail.
///
/// All variants are caller-correctable and are raised before any mutation,
/// so a failed operation leaves the lot exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    /// A slot count on initialize or expand was not positive.
    #[error("{0}")]
    InvalidSlotCount(String),

    /// The car is missing its registration number or color.
    #[error("Car registration number and color are required")]
    InvalidInput,

    /// A car with this registration number already occupies a slot.
    #[error("Car already parked")]
    AlreadyParked,

    /// Every slot is occupied.
    #[error("Parking lot is full")]
    LotFull,

    /// Release by slot number targeted a free slot.
    #[error("Slot number {0} is already empty")]
    SlotAlreadyEmpty(SlotNumber),

    /// Release was called without any identifier.
    #[error("Either slot number or car registration number is required")]
    MissingIdentifier,

    /// No slot carries this number.
    #[error("Slot number {0} not found")]
    SlotNotFound(i64),

    /// No parked car has this registration number.
    #[error("Car with registration number {0} not found")]
    CarNotFound(String),

    /// A color query matched nothing.
    #[error("{}", color_not_found_message(.mode, .color))]
    NotFound {
        /// The requested result mode.
        mode: ColorQuery,
        /// The color as the caller spelled it.
        color: String,
    },

    /// Status was requested while no car is parked.
    #[error("No cars are currently parked")]
    EmptyLot,
}

fn color_not_found_message(mode: &ColorQuery, color: &str) -> String {
    match mode {
        ColorQuery::RegistrationNumbers => format!("No cars found with color {color}"),
        ColorQuery::SlotNumbers => format!("No slots found with cars of color {color}"),
    }
}

impl LotError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSlotCount(_) => "INVALID_SLOT_COUNT",
            Self::InvalidInput => "INVALID_INPUT",
            Self::AlreadyParked => "ALREADY_PARKED",
            Self::LotFull => "LOT_FULL",
            Self::SlotAlreadyEmpty(_) => "SLOT_ALREADY_EMPTY",
            Self::MissingIdentifier => "MISSING_IDENTIFIER",
            Self::SlotNotFound(_) => "SLOT_NOT_FOUND",
            Self::CarNotFound(_) => "CAR_NOT_FOUND",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::EmptyLot => "EMPTY_LOT",
        }
    }

    /// Whether this error belongs to the not-found class.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SlotNotFound(_) | Self::CarNotFound(_) | Self::NotFound { .. } | Self::EmptyLot
        )
    }
}

impl From<LotError> for AppError {
    fn from(err: LotError) -> Self {
        let app = if err.is_not_found() {
            AppError::not_found(err.to_string())
        } else {
            AppError::validation(err.to_string())
        };
        app.with_reason(err.code())
    }
}
