//! Seven-segment glyph geometry
//!
//! Segments are numbered by their anchor inside the glyph box:
//!
//! ```text
//!      0          0: top        (x 0, y 0,   horizontal)
//!    3   4        1: middle     (x 0, y 1/2, horizontal)
//!      1          2: bottom     (x 0, y 1,   horizontal)
//!    5   6        3: upper left (x 0, y 0,   vertical)
//!      2          4: upper right(x 1, y 0,   vertical)
//!                 5: lower left (x 0, y 1/2, vertical)
//!                 6: lower right(x 1, y 1/2, vertical)
//! ```

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Segment anchor within a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Horizontal anchor: 0 (left edge) or 1 (right edge)
    pub x: u8,
    /// Vertical anchor in half heights: 0, 1 or 2
    pub y_halves: u8,
    /// Vertical segments span half the glyph height
    pub vertical: bool,
}

const fn seg(x: u8, y_halves: u8, vertical: bool) -> Segment {
    Segment {
        x,
        y_halves,
        vertical,
    }
}

/// All seven segments, indexed as in the module diagram
pub const SEGMENTS: [Segment; 7] = [
    seg(0, 0, false),
    seg(0, 1, false),
    seg(0, 2, false),
    seg(0, 0, true),
    seg(1, 0, true),
    seg(0, 1, true),
    seg(1, 1, true),
];

/// Lit segments for each digit
const DIGITS: [&[usize]; 10] = [
    &[0, 2, 3, 4, 5, 6],
    &[4, 6],
    &[0, 1, 2, 3, 6],
    &[0, 1, 2, 4, 6],
    &[1, 4, 5, 6],
    &[0, 1, 2, 4, 5],
    &[0, 1, 2, 3, 4, 5],
    &[2, 6, 4],
    &[0, 1, 2, 3, 4, 5, 6],
    &[1, 2, 4, 5, 6],
];

/// Segment indices lit for `digit`, or `None` above 9
pub fn segments_for(digit: u8) -> Option<&'static [usize]> {
    DIGITS.get(usize::from(digit)).copied()
}

/// Pixel rectangle of one segment
///
/// `stroke` is the segment thickness. Segments on the right and bottom
/// edges sit one pixel outside `size`, so a glyph covers
/// `size + (1, 1)` pixels.
pub fn segment_rect(segment: Segment, origin: Point, size: Size, stroke: u32) -> Rectangle {
    let x = origin.x + i32::from(segment.x) * size.width as i32;
    let y = origin.y + i32::from(segment.y_halves) * (size.height / 2) as i32;
    let extent = if segment.vertical {
        Size::new(stroke, size.height / 2)
    } else {
        Size::new(size.width, stroke)
    };
    Rectangle::new(Point::new(x, y), extent)
}
