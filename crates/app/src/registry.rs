//! Observer registry — a weak set of listeners with synchronous fan-out.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use btsim_domain::event::RadioEvent;

use crate::ports::observer::PowerObserver;

/// The set of currently registered observers.
///
/// Registrations are held as [`Weak`] references: the fixture never keeps
/// a listener alive, and a listener dropped by the harness is silently
/// skipped and pruned on the next operation.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Mutex<Vec<Weak<dyn PowerObserver>>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`, unless the same allocation is already present.
    pub fn add(&self, observer: &Arc<dyn PowerObserver>) {
        let mut observers = self.lock();
        observers.retain(|weak| weak.strong_count() > 0);
        if observers.iter().any(|weak| same_observer(weak, observer)) {
            tracing::trace!("observer already registered");
            return;
        }
        observers.push(Arc::downgrade(observer));
        tracing::trace!(registered = observers.len(), "observer registered");
    }

    /// Remove `observer`. Removing an absent observer is a no-op.
    pub fn remove(&self, observer: &Arc<dyn PowerObserver>) {
        let mut observers = self.lock();
        observers.retain(|weak| weak.strong_count() > 0 && !same_observer(weak, observer));
        tracing::trace!(registered = observers.len(), "observer unregistered");
    }

    /// Deliver `event` to every live registered observer, in registration
    /// order.
    ///
    /// The live set is snapshotted under the lock and delivery happens
    /// outside it, so an observer may (un)register observers from inside
    /// its callback.
    pub fn notify_all(&self, event: &RadioEvent) {
        let live: Vec<Arc<dyn PowerObserver>> = {
            let mut observers = self.lock();
            observers.retain(|weak| weak.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        tracing::trace!(kind = %event.kind, delivered = live.len(), "notifying observers");
        for observer in live {
            observer.receive_notification(event);
        }
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Whether no live observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Weak<dyn PowerObserver>>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// Identity compares allocation addresses only; vtable pointers are not
// stable across codegen units.
fn same_observer(weak: &Weak<dyn PowerObserver>, observer: &Arc<dyn PowerObserver>) -> bool {
    std::ptr::addr_eq(weak.as_ptr(), Arc::as_ptr(observer))
}
