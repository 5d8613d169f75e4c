//! Pushbutton detector

use super::debounce::EdgeDebouncer;

/// A debounced button notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Press {
    /// Edge timestamp (ms)
    pub at_ms: u64,
}

/// Button-line edge detector
///
/// Both press and release edges trigger it; contact chatter inside the
/// debounce window collapses into a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PushDetector {
    debouncer: EdgeDebouncer,
}

impl PushDetector {
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            debouncer: EdgeDebouncer::new(debounce_ms),
        }
    }

    /// Handle an edge (rising or falling) on the button line
    pub fn on_edge(&mut self, now_ms: u64) -> Option<Press> {
        self.debouncer
            .accept(now_ms)
            .then_some(Press { at_ms: now_ms })
    }
}
