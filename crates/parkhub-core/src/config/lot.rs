//! Parking lot configuration.

use serde::{Deserialize, Serialize};

/// Parking lot startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotConfig {
    /// Number of slots to initialize at startup. `0` starts with an empty,
    /// uninitialized lot.
    #[serde(default)]
    pub initial_slots: u32,
    /// Largest lot that initialize and expand may produce.
    #[serde(default = "default_max_slots")]
    pub max_slots: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            initial_slots: 0,
            max_slots: default_max_slots(),
        }
    }
}

fn default_max_slots() -> u32 {
    1_000_000
}
