//! Date change detection for the poll loop

use crate::calendar::CalendarDate;

/// Poll interval of the date loop (ms)
pub const POLL_INTERVAL_MS: u64 = 10;

/// A change in the assembled date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateChange {
    /// Previously reported date (`None` on the first report)
    pub previous: Option<CalendarDate>,
    /// Newly assembled date
    pub current: CalendarDate,
}

/// Remembers the last reported date and reports only transitions
#[derive(Debug, Clone, Default)]
pub struct DateWatch {
    last: Option<CalendarDate>,
}

impl DateWatch {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Feed the latest assembly; returns a change if it differs
    ///
    /// The first observation is always reported.
    pub fn observe(&mut self, date: CalendarDate) -> Option<DateChange> {
        if self.last == Some(date) {
            return None;
        }
        let change = DateChange {
            previous: self.last,
            current: date,
        };
        self.last = Some(date);
        Some(change)
    }

    /// Last reported date
    pub fn last(&self) -> Option<CalendarDate> {
        self.last
    }
}
