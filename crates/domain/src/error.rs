//! Error types for the domain crate.
//!
//! The fixture's runtime operations cannot fail; the only fallible domain
//! surface is parsing a [`PowerState`](crate::power::PowerState) from text.

/// Returned when parsing a power state from anything but `"on"` or `"off"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid power state {value:?}, expected \"on\" or \"off\"")]
pub struct InvalidPowerState {
    /// The rejected input.
    pub value: String,
}
