//! Hardware abstraction traits
//!
//! These traits define the interface between the date logic and the
//! board-specific display and timer implementations.

pub mod clock;
pub mod display;

pub use clock::Clock;
pub use display::{
    Color, DateDisplay, DisplayError, DisplayExt, Glyph, GLYPH_ORIGINS, GLYPH_SIZE, STATUS_ORIGIN,
};
