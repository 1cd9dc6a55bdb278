//! Radio event — an immutable record of a hardware-state transition.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::notification::HardwareNotification;
use crate::power::PowerState;
use crate::time::{Timestamp, now};

/// Notification value broadcast when the simulated hardware changes state.
///
/// Events exist only transiently during fan-out; nothing stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioEvent {
    /// Unique id of this event.
    pub id: EventId,
    /// What happened.
    pub kind: HardwareNotification,
    /// Power state after the transition.
    pub power: PowerState,
    /// When the transition happened.
    pub timestamp: Timestamp,
}

impl RadioEvent {
    /// Create a `PowerChanged` event recording the new state.
    #[must_use]
    pub fn power_changed(power: PowerState) -> Self {
        Self {
            id: EventId::new(),
            kind: HardwareNotification::PowerChanged,
            power,
            timestamp: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_record_power_changed_kind() {
        let event = RadioEvent::power_changed(PowerState::On);
        assert_eq!(event.kind, HardwareNotification::PowerChanged);
        assert_eq!(event.power, PowerState::On);
    }

    #[test]
    fn should_assign_unique_ids_to_each_event() {
        let a = RadioEvent::power_changed(PowerState::On);
        let b = RadioEvent::power_changed(PowerState::On);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_stamp_event_with_transition_time() {
        let before = now();
        let event = RadioEvent::power_changed(PowerState::Off);
        let after = now();
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let event = RadioEvent::power_changed(PowerState::On);
        let json = serde_json::to_string(&event).unwrap();
        let parsed: RadioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
