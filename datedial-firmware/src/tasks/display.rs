//! Display task
//!
//! Redraws the date screen whenever the poll task reports a new date.

use datedial_core::traits::{Color, DisplayExt};
use datedial_display::SegmentDisplay;
use defmt::*;

use crate::channels::DATE_CHANGED;
use crate::display::Tft;

/// Date screen on the TFT
pub type DateScreen = SegmentDisplay<Tft>;

/// Display task - renders each reported date once
#[embassy_executor::task]
pub async fn display_task(mut screen: DateScreen) {
    info!("Display task started");

    loop {
        let date = DATE_CHANGED.wait().await;
        if let Err(e) = screen.render_date(&date, Color::BLUE) {
            warn!("Display update failed: {}", e);
        }
    }
}
