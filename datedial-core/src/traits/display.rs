//! Date display trait
//!
//! The panel screen is a row of six seven-segment digits (`YYMMDD`) with a
//! status line underneath. Drivers only need to draw single glyphs and a
//! line of text; the layout lives in [`DisplayExt::render_date`].

use core::fmt::{self, Write};

use heapless::String;

use crate::calendar::CalendarDate;

/// Glyph bounding box (width, height) in pixels
pub const GLYPH_SIZE: (u32, u32) = (20, 40);

/// Top-left corner of each of the six digit glyphs
///
/// Pairs are separated by a wider gap than the digits within a pair.
pub const GLYPH_ORIGINS: [(i32, i32); 6] = [(0, 0), (25, 0), (55, 0), (80, 0), (110, 0), (135, 0)];

/// Top-left corner of the status line, below the digits
pub const STATUS_ORIGIN: (i32, i32) = (30, GLYPH_SIZE.1 as i32 + 10);

/// Errors reported by a date display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Glyph requested for a value outside 0-9
    InvalidDigit(u8),
    /// The underlying draw target failed
    Draw,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::InvalidDigit(d) => write!(f, "no glyph for digit {}", d),
            DisplayError::Draw => f.write_str("draw target error"),
        }
    }
}

/// 24-bit colour; drivers convert to their native format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const CYAN: Color = Color::new(50, 210, 210);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Placement of one digit glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// Top-left corner
    pub position: (i32, i32),
    /// Bounding box (width, height)
    pub size: (u32, u32),
    /// Segment colour
    pub color: Color,
}

/// Trait for the panel screen
pub trait DateDisplay {
    /// Blank the whole screen
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw the status line
    fn render_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Draw one seven-segment digit
    ///
    /// Returns [`DisplayError::InvalidDigit`] for `digit > 9`; nothing is
    /// drawn in that case.
    fn render_glyph(&mut self, digit: u8, glyph: Glyph) -> Result<(), DisplayError>;

    /// Flush any buffered drawing to the panel
    fn present(&mut self) -> Result<(), DisplayError>;
}

/// Helper trait for drawing the date screen
pub trait DisplayExt: DateDisplay {
    /// Draw a date as six digits plus its `YYYY-MM-DD` status line
    fn render_date(&mut self, date: &CalendarDate, color: Color) -> Result<(), DisplayError> {
        self.clear()?;

        for (digit, position) in date.digits().into_iter().zip(GLYPH_ORIGINS) {
            self.render_glyph(
                digit,
                Glyph {
                    position,
                    size: GLYPH_SIZE,
                    color,
                },
            )?;
        }

        let mut text: String<16> = String::new();
        write!(text, "{}", date).map_err(|_| DisplayError::Draw)?;
        self.render_text(&text)?;

        self.present()
    }
}

// Blanket implementation for all DateDisplay types
impl<T: DateDisplay> DisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::{String as StdString, ToString};
    use std::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Text(StdString),
        Glyph(u8, (i32, i32)),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        fail_glyph: bool,
    }

    impl DateDisplay for Recorder {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.calls.push(Call::Clear);
            Ok(())
        }

        fn render_text(&mut self, text: &str) -> Result<(), DisplayError> {
            self.calls.push(Call::Text(text.to_string()));
            Ok(())
        }

        fn render_glyph(&mut self, digit: u8, glyph: Glyph) -> Result<(), DisplayError> {
            if digit > 9 {
                return Err(DisplayError::InvalidDigit(digit));
            }
            if self.fail_glyph {
                return Err(DisplayError::Draw);
            }
            assert_eq!(glyph.size, GLYPH_SIZE);
            self.calls.push(Call::Glyph(digit, glyph.position));
            Ok(())
        }

        fn present(&mut self) -> Result<(), DisplayError> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    #[test]
    fn test_render_date_layout() {
        let mut display = Recorder::default();
        let date = CalendarDate::new(1979, 11, 2).unwrap();
        display.render_date(&date, Color::BLUE).unwrap();

        assert_eq!(
            display.calls,
            [
                Call::Clear,
                Call::Glyph(7, (0, 0)),
                Call::Glyph(9, (25, 0)),
                Call::Glyph(1, (55, 0)),
                Call::Glyph(1, (80, 0)),
                Call::Glyph(0, (110, 0)),
                Call::Glyph(2, (135, 0)),
                Call::Text("1979-11-02".to_string()),
                Call::Present,
            ]
        );
    }

    #[test]
    fn test_render_date_stops_on_error() {
        let mut display = Recorder {
            fail_glyph: true,
            ..Default::default()
        };
        let date = CalendarDate::new(1979, 11, 2).unwrap();
        assert_eq!(display.render_date(&date, Color::BLUE), Err(DisplayError::Draw));
        assert_eq!(display.calls, [Call::Clear]);
    }

    #[test]
    fn test_glyphs_do_not_overlap() {
        for pair in GLYPH_ORIGINS.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= GLYPH_SIZE.0 as i32);
        }
        assert!(STATUS_ORIGIN.1 > GLYPH_SIZE.1 as i32);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DisplayError::InvalidDigit(12).to_string(), "no glyph for digit 12");
    }
}
