//! GPIO / peripheral pin assignments for the thermostat main board.
//!
//! Single source of truth — every component references this module rather
//! than hard-coding pin numbers.  The defaults here are what the firmware
//! was written against; tests that need a different wiring remap through
//! [`PinMap`](crate::config::PinMap) instead of editing constants.

// ---------------------------------------------------------------------------
// Actuators (relay board, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output: heater relay coil.
pub const HEATER_GPIO: i32 = 3;
/// Digital output: circulation fan relay coil.
pub const FAN_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Sensors (DHT22 one-wire)
// ---------------------------------------------------------------------------

/// DHT22 mounted inside the enclosure.  A sensor created on this pin
/// reports the inside location; any other pin reads as outside.
pub const SENSOR_INSIDE_GPIO: i32 = 7;
/// DHT22 mounted outside the enclosure (nominal wiring).
pub const SENSOR_OUTSIDE_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Master power switch.  A single physical input — reads return the switch
/// state regardless of which pin is queried.
pub const POWER_SWITCH_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Character display (I²C backpack)
// ---------------------------------------------------------------------------

/// I²C address of the LCD backpack.
pub const LCD_I2C_ADDR: u8 = 0x27;
pub const LCD_COLS: u8 = 16;
pub const LCD_ROWS: u8 = 2;

// ---------------------------------------------------------------------------
// Digital levels and watchdog
// ---------------------------------------------------------------------------

/// Logic-high level for `digital_write` / `digital_read`.
pub const HIGH: u8 = 1;
/// Logic-low level.
pub const LOW: u8 = 0;

/// Watchdog timeout the firmware arms at boot (seconds).
pub const WDT_TIMEOUT_SECS: u32 = 4;
