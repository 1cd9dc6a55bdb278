//! Observer port — the capability interface notified of power transitions.

use btsim_domain::event::RadioEvent;

/// An external listener notified of hardware-control events.
///
/// Listeners are registered with the facade as `Arc<dyn PowerObserver>`;
/// delivery is synchronous with the triggering state change, so by the
/// time `turn_on`/`turn_off` returns every registered observer has seen
/// the event.
pub trait PowerObserver: Send + Sync {
    /// Receive one notification.
    fn receive_notification(&self, event: &RadioEvent);
}
