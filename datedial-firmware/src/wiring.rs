//! Startup wiring
//!
//! Builds the knob panel and every input driver before any task is
//! spawned. A failure anywhere here halts startup; no partially wired knob
//! is ever left running on its own.

use core::fmt;

use datedial_core::config::{ConfigError, PanelConfig};
use datedial_core::{KnobId, KnobPanel};
use datedial_display::SegmentDisplay;
use datedial_drivers::KnobInput;
use defmt::*;
use embassy_executor::{SpawnError, Spawner};
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use embassy_time::Delay;

use crate::clock::SystemClock;
use crate::display::Tft;
use crate::tasks::{self, KnobPins};

/// The three GPIOs of one knob: rotation A, rotation B, button
pub type KnobGpios = [Peri<'static, AnyPin>; 3];

/// Startup failures (all fatal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum WiringError {
    /// Panel configuration rejected
    Config(ConfigError),
    /// A task could not be spawned
    SubscriptionFailure { task: &'static str },
    /// The TFT did not come up
    Display,
}

impl fmt::Display for WiringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringError::Config(e) => write!(f, "panel configuration: {}", e),
            WiringError::SubscriptionFailure { task } => write!(f, "cannot spawn {} task", task),
            WiringError::Display => f.write_str("display initialization failed"),
        }
    }
}

fn spawn_failed(task: &'static str) -> impl FnOnce(SpawnError) -> WiringError {
    move |_| WiringError::SubscriptionFailure { task }
}

fn knob_input(panel: &KnobPanel, id: KnobId, [a, b, button]: KnobGpios) -> KnobPins {
    let knob = panel.knob(id);
    info!("Wiring {}", Display2Format(knob));
    KnobInput::new(
        knob.sense(),
        Input::new(a, Pull::Up),
        Input::new(b, Pull::Up),
        Input::new(button, Pull::Up),
        Delay,
        SystemClock,
    )
}

/// Build the panel, configure pins, and spawn every task
pub fn wire(
    spawner: Spawner,
    config: &PanelConfig,
    gpios: [KnobGpios; 3],
    tft: Result<Tft, WiringError>,
) -> Result<(), WiringError> {
    let panel = KnobPanel::new(config).map_err(WiringError::Config)?;

    let [year, month, day] = gpios;
    let inputs = [
        knob_input(&panel, KnobId::Year, year),
        knob_input(&panel, KnobId::Month, month),
        knob_input(&panel, KnobId::Day, day),
    ];

    let display = SegmentDisplay::new(tft?);

    spawner.spawn(tasks::display_task(display).map_err(spawn_failed("display"))?);
    spawner.spawn(tasks::poll_task(panel).map_err(spawn_failed("poll"))?);
    for input in inputs {
        spawner.spawn(tasks::knob_task(input).map_err(spawn_failed("knob"))?);
    }

    Ok(())
}
