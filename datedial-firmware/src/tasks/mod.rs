//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod display;
pub mod knob;
pub mod poll;

pub use display::{display_task, DateScreen};
pub use knob::{knob_task, KnobPins};
pub use poll::poll_task;
