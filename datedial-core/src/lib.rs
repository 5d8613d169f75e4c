//! Board-agnostic core logic for the Datedial firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Bounded knob values and per-line edge debouncing
//! - Quadrature decoding and push detection for rotary encoders
//! - Calendar arithmetic and the date assembler with its day repair
//! - The knob panel (single owner of all knob values) and date watch
//! - Configuration type definitions and validation
//! - Display and clock traits implemented by other crates

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod calendar;
pub mod config;
pub mod events;
pub mod knob;
pub mod panel;
pub mod traits;

pub use calendar::{
    days_in_month, is_leap_year, Assembled, AssemblyError, CalendarDate, DateAssembler,
};
pub use events::{KnobAction, KnobEvent, KnobId, Step};
pub use knob::{BoundedValue, Knob, KnobSense};
pub use panel::{DateChange, DateWatch, KnobPanel, POLL_INTERVAL_MS};
pub use traits::{Clock, DateDisplay, DisplayError, DisplayExt};
