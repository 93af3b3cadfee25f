//! Car identity.

use serde::{Deserialize, Serialize};

/// A car presented for parking.
///
/// The registration number is the unique identifier; the color is a free-form
/// label matched case-insensitively by color queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Registration plate, matched exactly.
    pub registration_number: String,
    /// Color label as given by the caller.
    pub color: String,
}

impl Car {
    /// Creates a car record.
    pub fn new(registration_number: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            registration_number: registration_number.into(),
            color: color.into(),
        }
    }

    /// Both identifying fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.registration_number.is_empty() && !self.color.is_empty()
    }

    /// Case-insensitive color comparison.
    pub fn has_color(&self, color: &str) -> bool {
        self.color.to_lowercase() == color.to_lowercase()
    }
}
