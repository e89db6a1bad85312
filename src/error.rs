//! Unified error types for the simulation layer.
//!
//! The hardware model is deliberately "never fails": every default-mode
//! operation succeeds unconditionally, so the only runtime error kind is
//! the opt-in strict-pin check.  All variants are `Copy` so they can be
//! passed around without allocation.

use core::fmt;

/// Every fallible operation in the simulation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An actuator write addressed a pin with no configured role.
    /// Only produced when [`strict_pins`](crate::config::SimConfig::strict_pins)
    /// is enabled; the default policy silently absorbs unknown pins.
    UnrecognizedPin { pin: i32 },
    /// Configuration failed validation.
    /// The `&'static str` describes which field and why.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedPin { pin } => write!(f, "unrecognized pin {}", pin),
            Self::Config(msg) => write!(f, "config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Errors surfaced through the `embedded-hal` pin adapters map to the
/// generic kind; the simulation has no richer electrical taxonomy.
impl embedded_hal::digital::Error for Error {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Simulation-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
