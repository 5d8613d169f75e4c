//! Embassy-backed millisecond clock

use datedial_core::Clock;
use embassy_time::Instant;

/// Milliseconds since boot from the embassy time driver
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
