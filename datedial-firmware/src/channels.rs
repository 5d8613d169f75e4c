//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use datedial_core::{CalendarDate, KnobEvent};

/// Channel capacity for knob events
///
/// Knob tasks wait when it is full, so bursts are delayed, never dropped.
pub const KNOB_EVENT_CHANNEL_SIZE: usize = 16;

/// Rotation and button events from the knob tasks to the poll task
pub static KNOB_EVENTS: Channel<CriticalSectionRawMutex, KnobEvent, KNOB_EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Latest assembled date, raised by the poll task on every change
pub static DATE_CHANGED: Signal<CriticalSectionRawMutex, CalendarDate> = Signal::new();
