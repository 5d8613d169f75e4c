//! Knob input task
//!
//! One instance per knob. Waits for edges on the knob's lines, decodes
//! them, and forwards accepted events to the poll task. The task never
//! touches knob values.

use datedial_drivers::{InputError, KnobInput};
use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Delay;

use crate::channels::KNOB_EVENTS;
use crate::clock::SystemClock;

/// Knob input wired to RP2040 GPIOs
pub type KnobPins = KnobInput<Input<'static>, Input<'static>, Input<'static>, Delay, SystemClock>;

/// Knob task - decodes one encoder and its button
#[embassy_executor::task(pool_size = 3)]
pub async fn knob_task(mut input: KnobPins) {
    let id = input.sense().id();
    info!("Knob task started: {}", id);

    loop {
        match input.next_event().await {
            // Waits while the channel is full
            Ok(Some(event)) => KNOB_EVENTS.send(event).await,
            Ok(None) => trace!("{}: edge rejected", id),
            // RP2040 GPIO reads cannot fail
            Err(InputError::Pin(never)) => match never {},
        }
    }
}
