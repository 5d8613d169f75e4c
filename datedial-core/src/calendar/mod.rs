//! Calendar dates assembled from knob values
//!
//! Three independent knobs can describe impossible dates (April 31st,
//! February 29th of a common year). The assembler turns them into a real
//! date by correcting the day knob in place.

pub mod assembler;
pub mod date;

pub use assembler::{Assembled, AssemblyError, DateAssembler};
pub use date::{days_in_month, is_leap_year, month_limit, CalendarDate};
