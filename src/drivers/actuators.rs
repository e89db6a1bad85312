//! Heater / fan relay bank.
//!
//! Two binary outputs addressed by GPIO number.  A write to a configured
//! pin flips the corresponding flag in the shared context and emits the
//! timestamped diagnostic line; a write to any other pin is absorbed
//! silently unless strict-pin mode is on.  That silent-absorb policy
//! mirrors the real digital-write call, which never reports wiring
//! mistakes — strict mode exists for harnesses that want them surfaced.

use std::rc::Rc;

use log::debug;

use crate::context::SimContext;
use crate::error::{Error, Result};
use crate::trace::ActuatorRole;

/// Pin direction accepted by [`ActuatorBank::configure`].  Mode is not
/// modeled; the variant is recorded nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// The relay bank.  Holds no state of its own — actuator flags live in the
/// shared context so every component observes the same board.
pub struct ActuatorBank {
    ctx: Rc<SimContext>,
}

impl ActuatorBank {
    pub fn new(ctx: Rc<SimContext>) -> Self {
        Self { ctx }
    }

    /// Drive the relay wired to `pin`.
    ///
    /// Known pins always succeed and emit a diagnostic line even when the
    /// state does not change.  Unknown pins: `Ok(())` with no effect by
    /// default, [`Error::UnrecognizedPin`] in strict mode.
    pub fn write(&mut self, pin: i32, on: bool) -> Result<()> {
        let pins = self.ctx.config().pins;
        if pin == pins.heater {
            self.ctx.set_actuator(ActuatorRole::Heater, on);
            Ok(())
        } else if pin == pins.fan {
            self.ctx.set_actuator(ActuatorRole::Fan, on);
            Ok(())
        } else if self.ctx.config().strict_pins {
            Err(Error::UnrecognizedPin { pin })
        } else {
            Ok(())
        }
    }

    /// Accept a pin-direction configuration call.  Real hardware would
    /// program the pin mux; the simulation has nothing to program.
    pub fn configure(&mut self, pin: i32, mode: PinMode) {
        debug!("actuators(sim): pin_mode({}, {:?}) ignored", pin, mode);
    }

    pub fn heater_on(&self) -> bool {
        self.ctx.heater_on()
    }

    pub fn fan_on(&self) -> bool {
        self.ctx.fan_on()
    }
}
