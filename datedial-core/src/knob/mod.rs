//! Knob input model
//!
//! A knob is a rotary encoder with a pushbutton, bound to a named integer
//! value with a fixed inclusive range.
//!
//! ```text
//!   line A (falling) ──┐
//!                      ├─► QuadratureDecoder ──► Step ──┐
//!   line B (falling) ──┘                                ├─► Knob ─► BoundedValue
//!   button (both)  ────────► PushDetector ──► Press ────┘
//! ```
//!
//! The decoder and push detector only decide *whether* an edge counts.
//! Applying the result to the value is done by whoever owns the [`Knob`].

pub mod bounded;
pub mod debounce;
pub mod device;
pub mod push;
pub mod quadrature;

pub use bounded::BoundedValue;
pub use debounce::EdgeDebouncer;
pub use device::{DayRepair, Knob, KnobSense};
pub use push::{Press, PushDetector};
pub use quadrature::{Level, Line, PendingEdge, QuadratureDecoder, SETTLE_MS};
