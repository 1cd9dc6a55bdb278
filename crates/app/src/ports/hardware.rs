//! Hardware-control port — the facade capability interface.

use std::sync::Arc;

use btsim_domain::power::PowerState;
use btsim_domain::status::RadioStatus;

use crate::ports::observer::PowerObserver;

/// Query and mutate the simulated hardware's power state, and manage the
/// observer set.
///
/// None of the operations can fail. `turn_on`/`turn_off` are idempotent:
/// a call that does not change the state emits no notification, and by
/// the time a state-changing call returns every registered observer has
/// been informed.
pub trait HardwareControl: Send + Sync {
    /// Current power state.
    fn power_state(&self) -> PowerState;

    /// Whether the radio is powered.
    fn is_powered(&self) -> bool {
        self.power_state().is_on()
    }

    /// Power the radio on, notifying observers when the state changed.
    fn turn_on(&self);

    /// Power the radio off, notifying observers when the state changed.
    fn turn_off(&self);

    /// Add `observer` to the set.
    ///
    /// Registering the same observer twice does not cause duplicate
    /// delivery.
    fn register_observer(&self, observer: &Arc<dyn PowerObserver>);

    /// Remove `observer` from the set. Removing an absent observer is a
    /// no-op.
    fn unregister_observer(&self, observer: &Arc<dyn PowerObserver>);

    /// Snapshot of the simulated radio flags.
    fn status(&self) -> RadioStatus {
        RadioStatus::from_power(self.power_state())
    }
}

impl<T: HardwareControl> HardwareControl for Arc<T> {
    fn power_state(&self) -> PowerState {
        (**self).power_state()
    }

    fn turn_on(&self) {
        (**self).turn_on();
    }

    fn turn_off(&self) {
        (**self).turn_off();
    }

    fn register_observer(&self, observer: &Arc<dyn PowerObserver>) {
        (**self).register_observer(observer);
    }

    fn unregister_observer(&self, observer: &Arc<dyn PowerObserver>) {
        (**self).unregister_observer(observer);
    }
}
