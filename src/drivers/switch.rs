//! Master power-switch input.
//!
//! The board has exactly one switch, so reads return its value no matter
//! which pin the caller queries.  Firmware that polls several input pins
//! expecting different values will see them all agree here — a documented
//! limit of the simulation, not a bug to fix.

use std::rc::Rc;

use crate::context::SimContext;

pub struct SwitchInput {
    ctx: Rc<SimContext>,
}

impl SwitchInput {
    pub fn new(ctx: Rc<SimContext>) -> Self {
        Self { ctx }
    }

    /// Read the switch.  The pin argument is accepted for interface
    /// compatibility and ignored.
    pub fn read(&self, _pin: i32) -> bool {
        self.ctx.switch_on()
    }
}
