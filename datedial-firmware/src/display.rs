//! TFT panel wiring
//!
//! 1.8" ST7735 160x128 TFT on SPI1, mounted in landscape:
//!
//! | Signal | GPIO |
//! |--------|------|
//! | DC     | 8    |
//! | CS     | 9    |
//! | SCK    | 10   |
//! | MOSI   | 11   |
//! | RST    | 15   |
//!
//! These GPIOs are rejected for knobs by build.rs.

use datedial_display::{PANEL_HEIGHT, PANEL_WIDTH};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{PIN_10, PIN_11, PIN_15, PIN_8, PIN_9, SPI1};
use embassy_rp::spi::{self, Blocking, Spi};
use embassy_rp::Peri;
use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use st7735_lcd::{Orientation, ST7735};

use crate::wiring::WiringError;

/// SPI clock for the panel (Hz)
const SPI_FREQUENCY: u32 = 16_000_000;

/// The ST7735 driver over an exclusive SPI1 device
pub type Tft = ST7735<
    ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, NoDelay>,
    Output<'static>,
    Output<'static>,
>;

/// Bring up the SPI bus and initialize the panel in landscape
pub fn init_tft(
    spi: Peri<'static, SPI1>,
    sck: Peri<'static, PIN_10>,
    mosi: Peri<'static, PIN_11>,
    cs: Peri<'static, PIN_9>,
    dc: Peri<'static, PIN_8>,
    rst: Peri<'static, PIN_15>,
) -> Result<Tft, WiringError> {
    let mut config = spi::Config::default();
    config.frequency = SPI_FREQUENCY;

    let bus = Spi::new_blocking_txonly(spi, sck, mosi, config);
    let cs = Output::new(cs, Level::High);
    let device = ExclusiveDevice::new_no_delay(bus, cs).map_err(|_| WiringError::Display)?;

    let dc = Output::new(dc, Level::Low);
    let rst = Output::new(rst, Level::High);

    // The driver clips to the size given here and does not swap it on
    // rotation, so pass the landscape dimensions
    let mut tft = ST7735::new(device, dc, rst, true, false, PANEL_WIDTH, PANEL_HEIGHT);
    tft.init(&mut Delay).map_err(|_| WiringError::Display)?;
    tft.set_orientation(&Orientation::Landscape)
        .map_err(|_| WiringError::Display)?;

    Ok(tft)
}
