//! Hardware driver implementations
//!
//! This crate provides async drivers that connect the board-agnostic
//! decoding in datedial-core to real pins:
//!
//! - Knob input (two rotation lines plus a pushbutton per encoder)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod input;

pub use input::{InputError, KnobInput};
