//! Shared simulation context.
//!
//! The real board has one clock, one relay bank, and one power switch; the
//! simulation mirrors that with a single [`SimContext`] constructed from a
//! [`SimConfig`] and shared (`Rc`) by every component.  All state lives
//! behind interior mutability because execution is single-threaded and
//! strictly call-ordered — there is nothing to lock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::VirtualClock;
use crate::config::SimConfig;
use crate::trace::{ActuatorRole, SharedTrace, StdoutTrace, TraceEvent};

/// Process-wide simulation state: clock, actuator flags, switch value, and
/// the diagnostic sink.  One per run.
pub struct SimContext {
    config: SimConfig,
    clock: RefCell<VirtualClock>,
    heater_on: Cell<bool>,
    fan_on: Cell<bool>,
    // Fixed for the run; only the initial configuration can set it.
    switch_on: bool,
    trace: SharedTrace,
}

impl SimContext {
    /// Build a context that prints diagnostic lines to stdout.
    pub fn new(config: SimConfig) -> Rc<Self> {
        Self::with_trace(config, Rc::new(RefCell::new(StdoutTrace)))
    }

    /// Build a context with a caller-supplied sink (tests pass a
    /// [`BufferTrace`](crate::trace::BufferTrace) here).
    pub fn with_trace(config: SimConfig, trace: SharedTrace) -> Rc<Self> {
        let switch_on = config.power_switch_on;
        Rc::new(Self {
            config,
            clock: RefCell::new(VirtualClock::new()),
            heater_on: Cell::new(false),
            fan_on: Cell::new(false),
            switch_on,
            trace,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Clock ─────────────────────────────────────────────────

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms()
    }

    /// Advance virtual time.
    pub fn advance(&self, ms: u64) {
        self.clock.borrow_mut().advance(ms);
    }

    // ── Actuators ─────────────────────────────────────────────

    pub fn heater_on(&self) -> bool {
        self.heater_on.get()
    }

    pub fn fan_on(&self) -> bool {
        self.fan_on.get()
    }

    /// Set an actuator flag and emit the timestamped diagnostic line.
    /// Writes are unconditional — re-asserting the current state still
    /// produces a line, exactly like the relay driver it stands in for.
    pub(crate) fn set_actuator(&self, role: ActuatorRole, on: bool) {
        match role {
            ActuatorRole::Heater => self.heater_on.set(on),
            ActuatorRole::Fan => self.fan_on.set(on),
        }
        self.emit(TraceEvent::ActuatorChanged {
            role,
            at_ms: self.now_ms(),
            on,
        });
    }

    // ── Switch ────────────────────────────────────────────────

    /// Fixed power-switch value for this run.
    pub fn switch_on(&self) -> bool {
        self.switch_on
    }

    // ── Trace ─────────────────────────────────────────────────

    pub(crate) fn emit(&self, event: TraceEvent) {
        self.trace.borrow_mut().emit(&event);
    }
}
