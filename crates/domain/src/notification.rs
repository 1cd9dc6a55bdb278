//! Notification kinds delivered to hardware-control observers.

use serde::{Deserialize, Serialize};

/// Kind of hardware-control notification.
///
/// The fixture currently emits a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareNotification {
    /// The radio power state changed.
    PowerChanged,
}

impl std::fmt::Display for HardwareNotification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PowerChanged => f.write_str("power_changed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_snake_case_kind() {
        assert_eq!(
            HardwareNotification::PowerChanged.to_string(),
            "power_changed"
        );
    }

    #[test]
    fn should_serialize_as_snake_case_string() {
        let json = serde_json::to_string(&HardwareNotification::PowerChanged).unwrap();
        assert_eq!(json, "\"power_changed\"");
    }
}
