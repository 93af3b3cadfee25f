//! Query and release selectors.

use serde::{Deserialize, Serialize};

use super::slot::SlotNumber;

/// What a color query returns for each matching slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorQuery {
    /// Registration numbers of the matching cars.
    RegistrationNumbers,
    /// Slot numbers (as strings) holding the matching cars.
    SlotNumbers,
}

impl std::fmt::Display for ColorQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorQuery::RegistrationNumbers => write!(f, "registration numbers"),
            ColorQuery::SlotNumbers => write!(f, "slot numbers"),
        }
    }
}

/// Identifies the slot to release.
///
/// Built with [`ReleaseTarget::from_parts`], which applies the priority rule:
/// a slot number wins over a registration number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseTarget {
    /// Release by slot number. Out-of-range values are kept so the caller
    /// gets a not-found error naming them.
    Slot(i64),
    /// Release the slot holding the car with this registration number.
    Registration(String),
}

impl ReleaseTarget {
    /// Resolves the optional identifiers of a release request.
    ///
    /// Returns `None` when neither identifier is usable. An empty
    /// registration string counts as absent.
    pub fn from_parts(
        slot_number: Option<i64>,
        registration_number: Option<String>,
    ) -> Option<Self> {
        if let Some(slot) = slot_number {
            return Some(Self::Slot(slot));
        }
        registration_number
            .filter(|r| !r.is_empty())
            .map(Self::Registration)
    }

    /// The slot number when it is a valid `SlotNumber`.
    pub fn slot_number(&self) -> Option<SlotNumber> {
        match self {
            Self::Slot(n) => SlotNumber::try_from(*n).ok(),
            Self::Registration(_) => None,
        }
    }
}
