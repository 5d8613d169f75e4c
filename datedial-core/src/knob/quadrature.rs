//! Quadrature decoder
//!
//! Decodes a one-pulse-per-detent incremental encoder from falling edges
//! on its two rotation lines.
//!
//! A single edge is never trusted. When line A falls, the level of the
//! *far* line (B) is sampled, the caller waits [`SETTLE_MS`], and B is
//! sampled again. Only if B read high both times is the edge a real step:
//!
//! ```text
//!            ┌──────┐      ┌──────
//!   A  ──────┘      └──────┘          A falls while B high  => Increment
//!        ┌──────┐      ┌──────┐
//!   B  ──┘      └──────┘      └────   B falls while A high  => Decrement
//! ```
//!
//! Any other combination (far line low, or the two samples disagree) is
//! contact bounce or an incomplete transition and produces no step.
//!
//! The settle wait itself is not done here; the decoder is split into
//! [`QuadratureDecoder::begin`] and [`QuadratureDecoder::resolve`] so the
//! caller can suspend between them without blocking other knobs.

use super::debounce::EdgeDebouncer;
use crate::events::Step;

/// Settle interval between the two far-line samples (ms)
pub const SETTLE_MS: u32 = 5;

/// Digital line level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Encoder rotation line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Clock line; a confirmed fall increments
    A,
    /// Data line; a confirmed fall decrements
    B,
}

impl Line {
    /// The partner line sampled when this one falls
    pub fn far(self) -> Line {
        match self {
            Line::A => Line::B,
            Line::B => Line::A,
        }
    }

    /// Step produced by a confirmed fall on this line
    pub fn step(self) -> Step {
        match self {
            Line::A => Step::Increment,
            Line::B => Step::Decrement,
        }
    }
}

/// An accepted edge awaiting its second far-line sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingEdge {
    /// Line that fell
    pub line: Line,
    /// Far line level at the moment of the edge
    pub far_before: Level,
    /// Edge timestamp (ms)
    pub at_ms: u64,
}

/// Double-sample quadrature decoder for one encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    a: EdgeDebouncer,
    b: EdgeDebouncer,
}

impl QuadratureDecoder {
    /// Create a decoder; each line gets its own `debounce_ms` window
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            a: EdgeDebouncer::new(debounce_ms),
            b: EdgeDebouncer::new(debounce_ms),
        }
    }

    /// Handle a falling edge on `line`
    ///
    /// Returns `None` if the edge is inside the line's debounce window.
    /// Otherwise records the far line's level and returns the pending edge;
    /// the caller must wait [`SETTLE_MS`] and call [`resolve`](Self::resolve).
    pub fn begin(&mut self, line: Line, now_ms: u64, far_level: Level) -> Option<PendingEdge> {
        let debouncer = match line {
            Line::A => &mut self.a,
            Line::B => &mut self.b,
        };
        if !debouncer.accept(now_ms) {
            return None;
        }
        Some(PendingEdge {
            line,
            far_before: far_level,
            at_ms: now_ms,
        })
    }

    /// Finish a pending edge with the far line's level after settling
    pub fn resolve(&self, pending: PendingEdge, far_after: Level) -> Option<Step> {
        match (pending.far_before, far_after) {
            (Level::High, Level::High) => Some(pending.line.step()),
            _ => None,
        }
    }
}
