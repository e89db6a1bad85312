//! Integration scenarios for the peripheral simulation.
//!
//! These drive the facade exactly like the thermostat loop would and
//! assert on both the process-wide state and the captured diagnostic
//! lines, without any real hardware.

use std::cell::RefCell;
use std::rc::Rc;

use thermosim::pins;
use thermosim::{BufferTrace, DhtKind, Error, Location, SimConfig, SimHal};

fn make_hal(config: SimConfig) -> (SimHal, Rc<RefCell<BufferTrace>>) {
    let trace = Rc::new(RefCell::new(BufferTrace::new()));
    let hal = SimHal::with_trace(config, trace.clone());
    (hal, trace)
}

// ── Heat cycle: timestamps derive from the virtual clock ─────

#[test]
fn heat_cycle_formats_timestamps_from_the_clock() {
    let (mut hal, trace) = make_hal(SimConfig::default());

    hal.digital_write(pins::HEATER_GPIO, pins::HIGH).unwrap();
    assert!(hal.heater_on());

    hal.delay(65_000);
    assert_eq!(hal.millis(), 65_000);

    hal.digital_write(pins::HEATER_GPIO, pins::LOW).unwrap();
    assert!(!hal.heater_on());

    assert_eq!(
        trace.borrow().lines(),
        ["time: 00:00 Heat: ON", "time: 01:05 Heat: OFF"]
    );
}

#[test]
fn fan_mirrors_heater_with_its_own_label() {
    let (mut hal, trace) = make_hal(SimConfig::default());

    hal.digital_write(pins::FAN_GPIO, pins::HIGH).unwrap();
    assert!(hal.fan_on());
    assert!(!hal.heater_on(), "fan write must not touch the heater");

    hal.digital_write(pins::FAN_GPIO, pins::LOW).unwrap();
    assert!(!hal.fan_on());

    assert_eq!(
        trace.borrow().lines(),
        ["time: 00:00 Fan: ON", "time: 00:00 Fan: OFF"]
    );
}

#[test]
fn any_nonzero_level_reads_as_high() {
    let (mut hal, trace) = make_hal(SimConfig::default());
    hal.digital_write(pins::HEATER_GPIO, 7).unwrap();
    assert!(hal.heater_on());
    assert_eq!(trace.borrow().lines(), ["time: 00:00 Heat: ON"]);
}

#[test]
fn reasserting_a_state_still_emits_a_line() {
    // The relay driver it models prints on every write, changed or not.
    let (mut hal, trace) = make_hal(SimConfig::default());
    hal.digital_write(pins::HEATER_GPIO, pins::HIGH).unwrap();
    hal.digital_write(pins::HEATER_GPIO, pins::HIGH).unwrap();
    assert_eq!(
        trace.borrow().lines(),
        ["time: 00:00 Heat: ON", "time: 00:00 Heat: ON"]
    );
}

// ── Unknown-pin policy ───────────────────────────────────────

#[test]
fn unknown_pin_writes_are_silently_absorbed() {
    let (mut hal, trace) = make_hal(SimConfig::default());

    for pin in [0, 1, 5, 13, -3] {
        hal.digital_write(pin, pins::HIGH).unwrap();
    }

    assert!(!hal.heater_on());
    assert!(!hal.fan_on());
    assert!(trace.borrow().is_empty(), "no state change, no output");
}

#[test]
fn strict_mode_surfaces_unrecognized_pins() {
    let mut config = SimConfig::default();
    config.strict_pins = true;
    let (mut hal, trace) = make_hal(config);

    assert_eq!(
        hal.digital_write(5, pins::HIGH),
        Err(Error::UnrecognizedPin { pin: 5 })
    );
    assert!(trace.borrow().is_empty());

    // Known pins are unaffected by strict mode.
    hal.digital_write(pins::HEATER_GPIO, pins::HIGH).unwrap();
    assert!(hal.heater_on());
}

// ── Switch input ─────────────────────────────────────────────

#[test]
fn switch_reads_the_fixed_value_for_every_pin() {
    let (hal, _trace) = make_hal(SimConfig::default());
    for pin in [pins::POWER_SWITCH_GPIO, 0, 7, 99, -1] {
        assert_eq!(hal.digital_read(pin), pins::HIGH, "pin {}", pin);
    }

    let mut config = SimConfig::default();
    config.power_switch_on = false;
    let (hal, _trace) = make_hal(config);
    for pin in [pins::POWER_SWITCH_GPIO, 42] {
        assert_eq!(hal.digital_read(pin), pins::LOW, "pin {}", pin);
    }
}

// ── Sensor scenario ──────────────────────────────────────────

#[test]
fn inside_sensor_reports_defaults_with_asymmetric_timing() {
    let (hal, _trace) = make_hal(SimConfig::default());
    let mut sensor = hal.sensor(pins::SENSOR_INSIDE_GPIO, DhtKind::Dht22);
    sensor.begin();
    assert_eq!(sensor.location(), Location::Inside);

    let t = sensor.read_temperature();
    assert!((t - 22.0).abs() < f32::EPSILON);
    assert_eq!(hal.millis(), 0, "temperature read must not advance time");

    let h = sensor.read_humidity();
    assert!((h - 60.0).abs() < f32::EPSILON);
    assert_eq!(hal.millis(), 250, "humidity read charges 250 ms");
}

#[test]
fn humidity_latency_composes_with_delays() {
    let (mut hal, trace) = make_hal(SimConfig::default());
    let mut sensor = hal.sensor(pins::SENSOR_OUTSIDE_GPIO, DhtKind::Dht22);
    assert_eq!(sensor.location(), Location::Outside);

    hal.delay(59_000);
    let _ = sensor.read_humidity();
    assert_eq!(hal.millis(), 59_250);

    hal.digital_write(pins::HEATER_GPIO, pins::HIGH).unwrap();
    hal.delay(750);
    hal.digital_write(pins::HEATER_GPIO, pins::LOW).unwrap();

    assert_eq!(
        trace.borrow().lines(),
        ["time: 00:59 Heat: ON", "time: 01:00 Heat: OFF"]
    );
}

// ── Pin remapping ────────────────────────────────────────────

#[test]
fn remapped_pins_drive_the_same_roles() {
    let mut config = SimConfig::default();
    config.pins.heater = 10;
    config.pins.fan = 11;
    config.pins.sensor_inside = 5;
    config.validate().unwrap();
    let (mut hal, trace) = make_hal(config);

    // The old heater pin is now unknown.
    hal.digital_write(pins::HEATER_GPIO, pins::HIGH).unwrap();
    assert!(!hal.heater_on());
    assert!(trace.borrow().is_empty());

    hal.digital_write(10, pins::HIGH).unwrap();
    assert!(hal.heater_on());
    assert_eq!(trace.borrow().lines(), ["time: 00:00 Heat: ON"]);

    assert_eq!(hal.sensor(5, DhtKind::Dht22).location(), Location::Inside);
    assert_eq!(hal.sensor(7, DhtKind::Dht22).location(), Location::Outside);
}

// ── Display ──────────────────────────────────────────────────

#[test]
fn display_print_is_the_only_observable_display_effect() {
    let (hal, trace) = make_hal(SimConfig::default());
    let mut lcd = hal.display(pins::LCD_I2C_ADDR, pins::LCD_COLS, pins::LCD_ROWS);

    lcd.begin();
    lcd.home();
    lcd.backlight();
    lcd.set_cursor(0, 1);
    assert!(trace.borrow().is_empty());

    lcd.print("Heating ON");
    assert_eq!(trace.borrow().lines(), ["LCD: Heating ON"]);
    assert_eq!(hal.millis(), 0, "display calls never cost time");
}

// ── Watchdog ─────────────────────────────────────────────────

#[test]
fn watchdog_calls_have_no_observable_effect() {
    let (mut hal, trace) = make_hal(SimConfig::default());

    hal.wdt_enable(pins::WDT_TIMEOUT_SECS);
    hal.wdt_reset();
    hal.delay(3_600_000); // far past the timeout; nothing fires
    hal.wdt_reset();

    assert!(hal.watchdog().is_enabled());
    assert_eq!(hal.watchdog().timeout_secs(), Some(4));
    assert_eq!(hal.millis(), 3_600_000);
    assert!(!hal.heater_on());
    assert!(trace.borrow().is_empty());
}
