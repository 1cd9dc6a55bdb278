//! Radio status snapshot — the wire shape reported to test harnesses.

use serde::{Deserialize, Serialize};

use crate::power::PowerState;

/// Snapshot of the simulated radio flags.
///
/// The consuming networking library reports classic Bluetooth and
/// Bluetooth LE as separate keys even though a single radio drives both,
/// so the snapshot mirrors the one simulated flag into both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioStatus {
    /// Classic Bluetooth power flag.
    pub bluetooth: PowerState,
    /// Bluetooth Low Energy power flag.
    pub bluetooth_low_energy: PowerState,
}

impl RadioStatus {
    /// Build a snapshot from the current power state.
    #[must_use]
    pub fn from_power(power: PowerState) -> Self {
        Self {
            bluetooth: power,
            bluetooth_low_energy: power,
        }
    }
}
