//! # btsim-app
//!
//! Application layer — port definitions (traits) and in-process
//! infrastructure for the hardware-control fixture.
//!
//! ## Responsibilities
//! - Define the **facade port** [`HardwareControl`](ports::HardwareControl)
//!   that the virtual adapter implements and CI harnesses program against
//! - Define the **observer port** [`PowerObserver`](ports::PowerObserver)
//!   implemented by listener types
//! - Provide the [`ObserverRegistry`](registry::ObserverRegistry) — a weak
//!   set of observers with synchronous fan-out
//! - Provide the [`RadioEventBus`](event_bus::RadioEventBus) broadcast
//!   channel for harnesses that await events instead of installing
//!   callbacks
//!
//! ## Dependency rule
//! Depends on `btsim-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod event_bus;
pub mod ports;
pub mod registry;
