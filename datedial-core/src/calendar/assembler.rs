//! Date assembler
//!
//! Combines the year, month and day knobs into a [`CalendarDate`]. When the
//! day does not exist in the selected month, the day knob is corrected in
//! place instead of rejecting the combination:
//!
//! 1. The day saturates at the longest length the month can ever have
//!    (31, 30, or 29 for February), so turning the month knob from a
//!    31-day month to a 30-day month pulls the day back with it.
//! 2. If the date is still invalid (February 29th of a common year), the
//!    day knob steps back by exactly one and the date is rebuilt.
//! 3. A date that is still invalid after that single step means the knob
//!    ranges or month table are broken. This is reported as
//!    [`AssemblyError::RepairInvariantViolation`] and never retried.
//!
//! Because the month table counts February as 29, a leap-year February
//! 30th or 31st is fixed by the saturation in step 1 and never reaches the
//! decrement: 1980-02-30 becomes 1980-02-29 directly. Only a common-year
//! February 29th takes step 2.
//!
//! The autocorrection is blunt: the user may turn the day to 31 regardless
//! of month and sees it roll back silently.

use core::fmt;

use super::date::{days_in_month, month_limit, CalendarDate};
use crate::knob::Knob;

/// Date assembly failures (both fatal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssemblyError {
    /// Month knob holds a value outside 1-12 (range misconfiguration)
    InvalidMonth(i32),
    /// The single-step day repair did not produce a valid date
    RepairInvariantViolation { year: i32, month: i32, day: i32 },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::InvalidMonth(month) => write!(f, "month {} outside 1-12", month),
            AssemblyError::RepairInvariantViolation { year, month, day } => write!(
                f,
                "day repair failed: {:04}-{:02}-{:02} is still invalid",
                year, month, day
            ),
        }
    }
}

/// Result of a successful assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Assembled {
    /// The valid date
    pub date: CalendarDate,
    /// Day knob value before any correction
    pub day_before: i32,
}

impl Assembled {
    /// Check if the day knob was corrected during assembly
    pub fn day_repaired(&self) -> bool {
        self.day_before != i32::from(self.date.day())
    }
}

/// Stateless date assembler
pub struct DateAssembler;

impl DateAssembler {
    /// Build a valid date from the three knobs, correcting `day` if needed
    pub fn assemble(year: &Knob, month: &Knob, day: &mut Knob) -> Result<Assembled, AssemblyError> {
        let y = year.value();
        let m = month.value();
        let day_before = day.value();

        let month_index = u8::try_from(m)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(AssemblyError::InvalidMonth(m))?;

        day.clamp_to(i32::from(month_limit(month_index)));
        if let Some(date) = CalendarDate::new(y, m, day.value()) {
            return Ok(Assembled { date, day_before });
        }

        day.repair_day_if_invalid(i32::from(days_in_month(month_index, y)));
        CalendarDate::new(y, m, day.value())
            .map(|date| Assembled { date, day_before })
            .ok_or(AssemblyError::RepairInvariantViolation {
                year: y,
                month: m,
                day: day.value(),
            })
    }
}
