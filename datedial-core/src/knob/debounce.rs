//! Coarse per-line edge debounce
//!
//! Suppresses edge notifications that arrive closer together than the
//! knob's debounce window on the *same* line. This is a floor beneath the
//! settle check in the quadrature decoder, not a replacement for it.

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Time-window edge filter for a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDebouncer {
    window_ms: u32,
    last_accepted_ms: Option<u64>,
}

impl EdgeDebouncer {
    /// Create a debouncer with the given window
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Decide whether an edge at `now_ms` counts
    ///
    /// The first edge is always accepted. Later edges are accepted once
    /// `window_ms` has elapsed since the last accepted one; rejected edges
    /// do not extend the window.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < u64::from(self.window_ms) {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

impl Default for EdgeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_edge_accepted() {
        let mut d = EdgeDebouncer::new(300);
        assert!(d.accept(0));
        assert!(!d.accept(299));
    }

    #[test]
    fn test_edges_inside_window_rejected() {
        let mut d = EdgeDebouncer::new(300);
        assert!(d.accept(1_000));
        assert!(!d.accept(1_001));
        assert!(!d.accept(1_299));
        assert!(d.accept(1_300));
    }

    #[test]
    fn test_rejected_edges_do_not_extend_window() {
        let mut d = EdgeDebouncer::new(100);
        assert!(d.accept(0));
        for t in (10..100).step_by(10) {
            assert!(!d.accept(t));
        }
        assert!(d.accept(100));
    }

    #[test]
    fn test_clock_going_backwards_is_rejected() {
        let mut d = EdgeDebouncer::new(100);
        assert!(d.accept(500));
        assert!(!d.accept(400));
    }
}
