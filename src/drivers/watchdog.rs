//! Watchdog timer stub.
//!
//! The real firmware arms a hardware watchdog at boot and resets it on
//! every loop iteration.  The simulation records the arm call and accepts
//! resets, but never fires: a stalled harness stays stalled instead of
//! rebooting the process.  Known fidelity gap, kept on purpose.

use log::info;

pub struct Watchdog {
    timeout_secs: Option<u32>,
}

impl Watchdog {
    pub fn new() -> Self {
        Self { timeout_secs: None }
    }

    /// Arm the watchdog.  Recorded for inspection only — no timeout is
    /// ever enforced.
    pub fn enable(&mut self, timeout_secs: u32) {
        self.timeout_secs = Some(timeout_secs);
        info!("Watchdog(sim): armed ({}s timeout, never fires)", timeout_secs);
    }

    /// Reset ("feed") the watchdog.  On real hardware skipping this would
    /// reboot the device; here it has no consequence either way.
    pub fn reset(&self) {}

    pub fn is_enabled(&self) -> bool {
        self.timeout_secs.is_some()
    }

    pub fn timeout_secs(&self) -> Option<u32> {
        self.timeout_secs
    }
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}
