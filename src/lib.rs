//! thermosim — host-side peripheral simulation for the greenhouse
//! thermostat firmware.
//!
//! The control loop (heater/fan decisions from temperature and humidity)
//! is developed and exercised on a workstation; this crate stands in for
//! the hardware it drives.  Every peripheral the firmware touches has a
//! deterministic model here: a virtual millisecond clock, the heater/fan
//! relay bank, the master power switch, the DHT temperature/humidity
//! sensor, the character display, and a watchdog that never fires.  The
//! only observable effects are timestamped diagnostic lines.
//!
//! ```
//! use thermosim::{pins, SimConfig, SimHal};
//!
//! let mut hal = SimHal::new(SimConfig::default());
//! hal.digital_write(pins::HEATER_GPIO, pins::HIGH)?; // "time: 00:00 Heat: ON"
//! hal.delay(65_000);
//! assert_eq!(hal.millis(), 65_000);
//! # Ok::<(), thermosim::Error>(())
//! ```

#![deny(unused_must_use)]

pub mod clock;
pub mod config;
pub mod context;
pub mod drivers;
pub mod error;
pub mod hal;
pub mod pins;
pub mod sensors;
pub mod trace;

pub use clock::VirtualClock;
pub use config::{PinMap, SimConfig};
pub use context::SimContext;
pub use drivers::actuators::{ActuatorBank, PinMode};
pub use drivers::display::LcdDisplay;
pub use drivers::switch::SwitchInput;
pub use drivers::watchdog::Watchdog;
pub use error::{Error, Result};
pub use hal::{ActuatorPin, SimDelay, SimHal, SwitchPin};
pub use sensors::{DhtKind, DhtSensor, Location};
pub use trace::{ActuatorRole, BufferTrace, SharedTrace, StdoutTrace, TraceEvent, TraceSink};
