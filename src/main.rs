//! Demo harness — one scripted pass over every simulated peripheral.
//!
//! Stands in for the thermostat loop while that firmware lives in its own
//! tree: arms the watchdog, reads both sensors, updates the display, and
//! runs one heat cycle followed by a fan purge.  Run it to see the
//! diagnostic lines a real session produces.

use anyhow::Result;
use log::info;

use thermosim::pins;
use thermosim::{DhtKind, SimConfig, SimHal};

fn main() -> Result<()> {
    let mut hal = SimHal::new(SimConfig::default());
    hal.wdt_enable(pins::WDT_TIMEOUT_SECS);

    if hal.digital_read(pins::POWER_SWITCH_GPIO) == pins::LOW {
        info!("power switch off — nothing to do");
        return Ok(());
    }

    let mut inside = hal.sensor(pins::SENSOR_INSIDE_GPIO, DhtKind::Dht22);
    let mut outside = hal.sensor(pins::SENSOR_OUTSIDE_GPIO, DhtKind::Dht22);
    inside.begin();
    outside.begin();

    let mut lcd = hal.display(pins::LCD_I2C_ADDR, pins::LCD_COLS, pins::LCD_ROWS);
    lcd.begin();
    lcd.backlight();

    let t_in = inside.read_temperature();
    let h_in = inside.read_humidity();
    let t_out = outside.read_temperature();

    lcd.home();
    lcd.print(&format!("in {t_in:.1}C {h_in:.0}%"));
    lcd.set_cursor(0, 1);
    lcd.print(&format!("out {t_out:.1}C"));

    // One heat cycle, then purge the moist air.
    hal.digital_write(pins::HEATER_GPIO, pins::HIGH)?;
    hal.delay(65_000);
    hal.wdt_reset();
    hal.digital_write(pins::HEATER_GPIO, pins::LOW)?;

    hal.digital_write(pins::FAN_GPIO, pins::HIGH)?;
    hal.delay(30_000);
    hal.wdt_reset();
    hal.digital_write(pins::FAN_GPIO, pins::LOW)?;

    info!("run complete at t={}ms", hal.millis());
    Ok(())
}
