//! Hardware facade — the call surface the firmware was written against.
//!
//! [`SimHal`] composes the simulated peripherals behind the digital-pin /
//! delay / watchdog functions of the real hardware library, so the
//! thermostat loop recompiles against the simulation unchanged.  For
//! firmware written against `embedded-hal` traits instead, the facade
//! hands out [`SimDelay`], [`ActuatorPin`], and [`SwitchPin`] adapters
//! over the same shared context.

use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::config::SimConfig;
use crate::context::SimContext;
use crate::drivers::actuators::{ActuatorBank, PinMode};
use crate::drivers::display::LcdDisplay;
use crate::drivers::switch::SwitchInput;
use crate::drivers::watchdog::Watchdog;
use crate::error::Result;
use crate::sensors::{DhtKind, DhtSensor};
use crate::trace::SharedTrace;

pub struct SimHal {
    ctx: Rc<SimContext>,
    actuators: ActuatorBank,
    switch: SwitchInput,
    watchdog: Watchdog,
}

impl SimHal {
    /// Bring up a board with diagnostic lines on stdout.
    pub fn new(config: SimConfig) -> Self {
        Self::from_context(SimContext::new(config))
    }

    /// Bring up a board with a caller-supplied trace sink.
    pub fn with_trace(config: SimConfig, trace: SharedTrace) -> Self {
        Self::from_context(SimContext::with_trace(config, trace))
    }

    fn from_context(ctx: Rc<SimContext>) -> Self {
        let actuators = ActuatorBank::new(ctx.clone());
        let switch = SwitchInput::new(ctx.clone());
        Self {
            ctx,
            actuators,
            switch,
            watchdog: Watchdog::new(),
        }
    }

    /// Shared simulation context, for components created outside the
    /// facade.
    pub fn context(&self) -> Rc<SimContext> {
        self.ctx.clone()
    }

    // ── Digital pins ──────────────────────────────────────────

    /// Drive an output pin.  Any nonzero level is HIGH.
    pub fn digital_write(&mut self, pin: i32, level: u8) -> Result<()> {
        self.actuators.write(pin, level != 0)
    }

    /// Read an input pin — always the power switch.
    pub fn digital_read(&self, pin: i32) -> u8 {
        u8::from(self.switch.read(pin))
    }

    /// Configure a pin direction.  Always a no-op.
    pub fn pin_mode(&mut self, pin: i32, mode: PinMode) {
        self.actuators.configure(pin, mode);
    }

    // ── Time ──────────────────────────────────────────────────

    /// Model a blocking delay: advance the virtual clock and return.
    pub fn delay(&self, ms: u64) {
        self.ctx.advance(ms);
    }

    /// Milliseconds since boot (virtual).
    pub fn millis(&self) -> u64 {
        self.ctx.now_ms()
    }

    // ── Watchdog ──────────────────────────────────────────────

    pub fn wdt_enable(&mut self, timeout_secs: u32) {
        self.watchdog.enable(timeout_secs);
    }

    pub fn wdt_reset(&self) {
        self.watchdog.reset();
    }

    pub fn watchdog(&self) -> &Watchdog {
        &self.watchdog
    }

    // ── Peripheral constructors ───────────────────────────────

    /// Create a DHT sensor on `pin`.
    pub fn sensor(&self, pin: i32, kind: DhtKind) -> DhtSensor {
        DhtSensor::new(self.ctx.clone(), pin, kind)
    }

    /// Create a character display at the given bus address and geometry.
    pub fn display(&self, addr: u8, cols: u8, rows: u8) -> LcdDisplay {
        LcdDisplay::new(self.ctx.clone(), addr, cols, rows)
    }

    // ── State queries ─────────────────────────────────────────

    pub fn heater_on(&self) -> bool {
        self.ctx.heater_on()
    }

    pub fn fan_on(&self) -> bool {
        self.ctx.fan_on()
    }

    // ── embedded-hal adapters ─────────────────────────────────

    /// Delay provider advancing the virtual clock.
    pub fn delay_handle(&self) -> SimDelay {
        SimDelay {
            ctx: self.ctx.clone(),
        }
    }

    /// Typed output-pin handle bound to one GPIO number.
    pub fn output_pin(&self, pin: i32) -> ActuatorPin {
        ActuatorPin {
            bank: ActuatorBank::new(self.ctx.clone()),
            pin,
        }
    }

    /// Typed input-pin handle bound to one GPIO number.
    pub fn input_pin(&self, pin: i32) -> SwitchPin {
        SwitchPin {
            switch: SwitchInput::new(self.ctx.clone()),
            pin,
        }
    }
}

// ── SimDelay ──────────────────────────────────────────────────

/// `embedded-hal` delay provider.  The clock has millisecond resolution,
/// so sub-millisecond delays round up — a delay is allowed to run long,
/// never short.
pub struct SimDelay {
    ctx: Rc<SimContext>,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ctx.advance(u64::from(ns).div_ceil(1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.ctx.advance(u64::from(us).div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ctx.advance(u64::from(ms));
    }
}

// ── ActuatorPin ───────────────────────────────────────────────

/// `embedded-hal` output pin over the relay bank.  Strict-pin mode
/// surfaces through the pin's error type; default mode never fails.
pub struct ActuatorPin {
    bank: ActuatorBank,
    pin: i32,
}

impl ErrorType for ActuatorPin {
    type Error = crate::error::Error;
}

impl OutputPin for ActuatorPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.bank.write(self.pin, false)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.bank.write(self.pin, true)
    }
}

// ── SwitchPin ─────────────────────────────────────────────────

/// `embedded-hal` input pin over the power switch.  Infallible, like the
/// register read it models.
pub struct SwitchPin {
    switch: SwitchInput,
    pin: i32,
}

impl ErrorType for SwitchPin {
    type Error = core::convert::Infallible;
}

impl InputPin for SwitchPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(self.switch.read(self.pin))
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(!self.switch.read(self.pin))
    }
}
