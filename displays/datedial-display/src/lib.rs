//! Seven-segment date screen for Datedial
//!
//! This crate provides:
//! - Seven-segment glyph geometry (`segments`)
//! - `SegmentDisplay`, an implementation of `DateDisplay` over any
//!   `embedded-graphics` draw target with `Rgb565` pixels
//!
//! The firmware wraps its SPI TFT in a `SegmentDisplay`; host tests use
//! the `embedded-graphics` mock display.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod screen;
pub mod segments;

pub use screen::{SegmentDisplay, PANEL_HEIGHT, PANEL_WIDTH};
pub use segments::{segment_rect, segments_for, SEGMENTS};
