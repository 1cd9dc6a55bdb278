//! # btsim-domain
//!
//! Pure domain model for the btsim Bluetooth hardware-control fixture.
//!
//! ## Responsibilities
//! - Foundational types: typed event identifier, timestamps, parse errors
//! - Define the simulated [`PowerState`](power::PowerState)
//! - Define [`HardwareNotification`](notification::HardwareNotification)
//!   kinds and the [`RadioEvent`](event::RadioEvent) fan-out payload
//! - Define the serializable [`RadioStatus`](status::RadioStatus) snapshot
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod error;
pub mod event;
pub mod id;
pub mod notification;
pub mod power;
pub mod status;
pub mod time;
