//! Encoder input drivers

pub mod knob;

pub use knob::{InputError, KnobInput};
