//! Datedial - Knob-driven Date Picker Firmware
//!
//! Three rotary encoders select a year, month and day on an RP2040 board.
//! The assembled date is logged and drawn as seven-segment digits on a
//! small TFT. Knob ranges and pins come from panel.toml, validated at
//! build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod clock;
mod display;
mod panel;
mod tasks;
mod wiring;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Datedial firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match panel::panel_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid panel configuration: {}", e);
            panic!("invalid panel configuration");
        }
    };

    // Knob GPIOs are taken by number from panel.toml
    let gpios = panel::take_knob_pins!(p);

    let tft = display::init_tft(p.SPI1, p.PIN_10, p.PIN_11, p.PIN_9, p.PIN_8, p.PIN_15);

    if let Err(e) = wiring::wire(spawner, &config, gpios, tft) {
        error!("Startup failed: {}", e);
        panic!("startup failed");
    }

    info!("All tasks spawned, firmware running");
}
