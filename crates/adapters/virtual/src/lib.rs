//! # btsim-adapter-virtual
//!
//! Virtual/simulated Bluetooth radio — the concrete implementation of the
//! [`HardwareControl`] port used by CI suites in place of real hardware.
//!
//! The radio holds a single power flag in memory. Toggling it notifies
//! registered [`PowerObserver`]s synchronously and publishes the same
//! [`RadioEvent`] to a broadcast channel for harnesses that await events.
//!
//! ## Dependency rule
//! Depends on `btsim-app` (port traits, registry, event bus) and
//! `btsim-domain` only.

pub mod config;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use btsim_app::event_bus::RadioEventBus;
use btsim_app::ports::hardware::HardwareControl;
use btsim_app::ports::observer::PowerObserver;
use btsim_app::registry::ObserverRegistry;
use btsim_domain::event::RadioEvent;
use btsim_domain::power::PowerState;

use config::VirtualRadioConfig;

/// Simulated Bluetooth radio.
///
/// Construct one per suite (or share one via [`Arc`]); there is no global
/// instance, so test runs stay isolated from each other.
pub struct VirtualBluetoothRadio {
    power: Mutex<PowerState>,
    observers: ObserverRegistry,
    events: RadioEventBus,
}

impl Default for VirtualBluetoothRadio {
    fn default() -> Self {
        Self::new(&VirtualRadioConfig::default())
    }
}

impl VirtualBluetoothRadio {
    /// Create a radio from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.event_capacity` is zero; [`VirtualRadioConfig`]
    /// validation rejects that value before it gets here.
    #[must_use]
    pub fn new(config: &VirtualRadioConfig) -> Self {
        Self {
            power: Mutex::new(config.initial_power),
            observers: ObserverRegistry::new(),
            events: RadioEventBus::new(config.event_capacity),
        }
    }

    /// Create a radio starting from `power`, with default capacity.
    #[must_use]
    pub fn with_initial_power(power: PowerState) -> Self {
        Self::new(&VirtualRadioConfig {
            initial_power: power,
            ..VirtualRadioConfig::default()
        })
    }

    /// Subscribe to radio events.
    ///
    /// The receiver gets every event published after the subscription is
    /// created; an event is already queued when the triggering toggle
    /// returns.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RadioEvent> {
        self.events.subscribe()
    }

    /// Subscribe to radio events as a stream.
    #[must_use]
    pub fn event_stream(&self) -> BroadcastStream<RadioEvent> {
        BroadcastStream::new(self.events.subscribe())
    }

    fn transition(&self, target: PowerState) {
        {
            let mut power = self.lock_power();
            if *power == target {
                tracing::trace!(state = %target, "power state unchanged, no notification");
                return;
            }
            *power = target;
            // Lock released before fan-out: observers may query the radio
            // from their callback.
        }
        let event = RadioEvent::power_changed(target);
        tracing::debug!(state = %target, event = %event.id, "power state changed");
        self.observers.notify_all(&event);
        self.events.publish(event);
    }

    fn lock_power(&self) -> MutexGuard<'_, PowerState> {
        self.power.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HardwareControl for VirtualBluetoothRadio {
    fn power_state(&self) -> PowerState {
        *self.lock_power()
    }

    #[tracing::instrument(skip(self))]
    fn turn_on(&self) {
        self.transition(PowerState::On);
    }

    #[tracing::instrument(skip(self))]
    fn turn_off(&self) {
        self.transition(PowerState::Off);
    }

    fn register_observer(&self, observer: &Arc<dyn PowerObserver>) {
        self.observers.add(observer);
    }

    fn unregister_observer(&self, observer: &Arc<dyn PowerObserver>) {
        self.observers.remove(observer);
    }
}
