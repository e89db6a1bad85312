//! Observable simulation output.
//!
//! Real hardware changes the world; the simulation emits text lines.  The
//! components produce structured [`TraceEvent`]s and push them through a
//! [`TraceSink`] — the default sink prints to stdout in the exact line
//! formats the firmware's operators read, and tests swap in a
//! [`BufferTrace`] to assert on the captured lines.
//!
//! Line formats are contractual:
//!
//! ```text
//! time: MM:SS Heat: ON
//! time: MM:SS Fan: OFF
//! LCD: <text>
//! ```
//!
//! with `MM = (ms / 1000) / 60` and `SS = (ms / 1000) % 60`, each
//! zero-padded to two digits.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

/// Which binary actuator a state-change event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorRole {
    Heater,
    Fan,
}

impl ActuatorRole {
    /// Label used in the diagnostic line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Heater => "Heat",
            Self::Fan => "Fan",
        }
    }
}

/// Structured events emitted by the simulated peripherals.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// An actuator changed state at the given virtual-clock time.
    ActuatorChanged {
        role: ActuatorRole,
        at_ms: u64,
        on: bool,
    },
    /// The character display rendered a line of text.
    DisplayPrint { text: String },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActuatorChanged { role, at_ms, on } => {
                let secs = at_ms / 1000;
                write!(
                    f,
                    "time: {:02}:{:02} {}: {}",
                    secs / 60,
                    secs % 60,
                    role.label(),
                    if *on { "ON" } else { "OFF" },
                )
            }
            Self::DisplayPrint { text } => write!(f, "LCD: {}", text),
        }
    }
}

/// Where diagnostic lines go.  Adapters decide — stdout for interactive
/// runs, an in-memory buffer for tests.
pub trait TraceSink {
    fn emit(&mut self, event: &TraceEvent);
}

/// Shared handle to a sink; the simulation is single-threaded, so plain
/// `Rc<RefCell<..>>` sharing is sufficient.
pub type SharedTrace = Rc<RefCell<dyn TraceSink>>;

// ── StdoutTrace ───────────────────────────────────────────────

/// Default sink: one line per event on standard output.
#[derive(Debug, Default)]
pub struct StdoutTrace;

impl TraceSink for StdoutTrace {
    fn emit(&mut self, event: &TraceEvent) {
        println!("{}", event);
    }
}

// ── BufferTrace ───────────────────────────────────────────────

/// Capturing sink for tests: records both the rendered lines and the
/// structured events.
#[derive(Debug, Default)]
pub struct BufferTrace {
    lines: Vec<String>,
    events: Vec<TraceEvent>,
}

impl BufferTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered diagnostic lines, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Structured events, in emission order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.events.clear();
    }
}

impl TraceSink for BufferTrace {
    fn emit(&mut self, event: &TraceEvent) {
        self.lines.push(event.to_string());
        self.events.push(event.clone());
    }
}
