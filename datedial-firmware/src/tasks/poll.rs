//! Date poll task
//!
//! Owns the knob panel. Every poll interval it applies the events queued
//! by the knob tasks, assembles the date (correcting the day knob if
//! needed), and reports changes to the log and the display task.

use datedial_core::panel::Applied;
use datedial_core::{DateWatch, KnobEvent, KnobPanel, POLL_INTERVAL_MS};
use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::{DATE_CHANGED, KNOB_EVENTS};

/// Poll task - single writer of all knob values
#[embassy_executor::task]
pub async fn poll_task(mut panel: KnobPanel) {
    info!("Poll task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let mut watch = DateWatch::new();

    loop {
        while let Ok(event) = KNOB_EVENTS.try_receive() {
            apply(&mut panel, event);
        }

        let assembled = match panel.assemble() {
            Ok(assembled) => assembled,
            Err(e) => {
                error!("Date assembly failed: {}", Display2Format(&e));
                panic!("date assembly failed");
            }
        };

        if assembled.day_repaired() {
            debug!(
                "Day corrected {} -> {}",
                assembled.day_before,
                assembled.date.day()
            );
        }

        if let Some(change) = watch.observe(assembled.date) {
            info!("Date knob says: {}", Display2Format(&change.current));
            DATE_CHANGED.signal(change.current);
        }

        ticker.next().await;
    }
}

fn apply(panel: &mut KnobPanel, event: KnobEvent) {
    match panel.apply(event) {
        Applied::Moved { knob, from, to } => {
            debug!("{}: {} -> {}", knob, from, to);
        }
        Applied::Saturated { knob, value } => {
            trace!("{}: at limit {}", knob, value);
        }
        Applied::Pressed { knob, .. } => {
            info!("Pushed button {=str}", panel.knob(knob).name());
        }
    }
}
