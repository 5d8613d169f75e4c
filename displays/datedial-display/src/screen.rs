//! Date screen over an `embedded-graphics` draw target
//!
//! Draws straight into the target; `present` is a no-op for unbuffered
//! panels such as the ST7735.

use datedial_core::traits::{Color, DateDisplay, DisplayError, Glyph, STATUS_ORIGIN};
use embedded_graphics::mono_font::ascii::FONT_9X18;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::segments::{segment_rect, segments_for, SEGMENTS};

/// Panel width in landscape orientation
pub const PANEL_WIDTH: u32 = 160;
/// Panel height in landscape orientation
pub const PANEL_HEIGHT: u32 = 128;

/// Status line capacity in characters
const STATUS_COLUMNS: u32 = 14;

/// Segment thickness in pixels
const STROKE: u32 = 1;

fn rgb565(color: Color) -> Rgb565 {
    Rgb888::new(color.r, color.g, color.b).into()
}

/// Seven-segment date screen
pub struct SegmentDisplay<D> {
    target: D,
    background: Rgb565,
    text_color: Rgb565,
}

impl<D> SegmentDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target: black background, cyan status text
    pub fn new(target: D) -> Self {
        Self {
            target,
            background: rgb565(Color::BLACK),
            text_color: rgb565(Color::CYAN),
        }
    }

    /// Give back the draw target
    pub fn release(self) -> D {
        self.target
    }

    fn fill(&mut self, rect: Rectangle, color: Rgb565) -> Result<(), DisplayError> {
        rect.into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Draw)
    }
}

impl<D> DateDisplay for SegmentDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(self.background)
            .map_err(|_| DisplayError::Draw)
    }

    fn render_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let font = &FONT_9X18;
        let origin = Point::new(STATUS_ORIGIN.0, STATUS_ORIGIN.1);

        // Blank the previous status line before drawing over it
        let band = Size::new(
            font.character_size.width * STATUS_COLUMNS,
            font.character_size.height,
        );
        self.fill(Rectangle::new(origin, band), self.background)?;

        let style = MonoTextStyle::new(font, self.text_color);
        Text::with_baseline(text, origin, style, Baseline::Top)
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Draw)?;
        Ok(())
    }

    fn render_glyph(&mut self, digit: u8, glyph: Glyph) -> Result<(), DisplayError> {
        let lit = segments_for(digit).ok_or(DisplayError::InvalidDigit(digit))?;

        let origin = Point::new(glyph.position.0, glyph.position.1);
        let size = Size::new(glyph.size.0, glyph.size.1);
        let color = rgb565(glyph.color);

        self.fill(Rectangle::new(origin, size + Size::new(1, 1)), self.background)?;
        for &index in lit {
            let rect = segment_rect(SEGMENTS[index], origin, size, STROKE);
            self.fill(rect, color)?;
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
