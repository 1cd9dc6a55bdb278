//! Power state — the on/off status of the simulated radio.

use serde::{Deserialize, Serialize};

use crate::error::InvalidPowerState;

/// On/off status of the simulated Bluetooth radio.
///
/// A freshly constructed fixture starts [`Off`](Self::Off) unless
/// configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    /// Whether the radio is powered.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

impl std::str::FromStr for PowerState {
    type Err = InvalidPowerState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(InvalidPowerState {
                value: other.to_string(),
            }),
        }
    }
}
