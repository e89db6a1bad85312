//! Simulated peripheral drivers: relay bank, power switch, character
//! display, and the watchdog stub.

pub mod actuators;
pub mod display;
pub mod switch;
pub mod watchdog;
