//! Simulation configuration parameters.
//!
//! All tunable parameters for a simulation run.  The defaults reproduce the
//! board the firmware was written against; tests remap pins or initial
//! readings here instead of touching component logic.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Logical role → GPIO number table.
///
/// Injected at construction so a harness can rewire the board without
/// editing [`pins`].  The defaults are the contractual assignments the
/// firmware hard-codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMap {
    /// Heater relay output.
    pub heater: i32,
    /// Fan relay output.
    pub fan: i32,
    /// A DHT sensor created on this pin reports the inside location;
    /// any other pin reads as outside.
    pub sensor_inside: i32,
    /// Nominal power-switch input.  Reads ignore the pin argument, so this
    /// exists for documentation and wiring diagrams only.
    pub power_switch: i32,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            heater: pins::HEATER_GPIO,
            fan: pins::FAN_GPIO,
            sensor_inside: pins::SENSOR_INSIDE_GPIO,
            power_switch: pins::POWER_SWITCH_GPIO,
        }
    }
}

/// Core simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Logical role → pin assignments.
    pub pins: PinMap,

    // --- Sensor model ---
    /// Temperature every sensor instance reports (°C).
    pub initial_temperature_c: f32,
    /// Relative humidity every sensor instance reports (%RH).
    pub initial_humidity_pct: f32,
    /// Virtual time charged to each humidity read (milliseconds).
    /// Temperature reads are free; the asymmetry mirrors the real part's
    /// combined-acquisition timing and is part of the contract.
    pub humidity_acquisition_ms: u64,

    // --- Inputs ---
    /// Fixed power-switch value for the whole run.  There is no exposed
    /// operation that changes it afterwards.
    pub power_switch_on: bool,

    // --- Pin policy ---
    /// When `true`, actuator writes to a pin with no configured role return
    /// [`Error::UnrecognizedPin`] instead of the default silent no-op.
    /// Off by default: the firmware this layer stands in for never
    /// validates pins.
    pub strict_pins: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            pins: PinMap::default(),
            initial_temperature_c: 22.0,
            initial_humidity_pct: 60.0,
            humidity_acquisition_ms: 250,
            power_switch_on: true,
            strict_pins: false,
        }
    }
}

impl SimConfig {
    /// Reject configurations a real board could not have.
    ///
    /// Construction does not validate — the simulation layer itself never
    /// fails — so harnesses that build configs from external input call
    /// this explicitly.
    pub fn validate(&self) -> Result<()> {
        let p = &self.pins;
        if p.heater == p.fan {
            return Err(Error::Config("heater and fan share a pin"));
        }
        if p.sensor_inside == p.heater || p.sensor_inside == p.fan {
            return Err(Error::Config("inside sensor pin collides with an actuator"));
        }
        // DHT22 datasheet envelope.
        if !(-40.0..=80.0).contains(&self.initial_temperature_c) {
            return Err(Error::Config("temperature outside -40..=80 °C"));
        }
        if !(0.0..=100.0).contains(&self.initial_humidity_pct) {
            return Err(Error::Config("humidity outside 0..=100 %RH"));
        }
        Ok(())
    }
}
