//! Integration with the embedded-graphics text pipeline.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::PixelColor,
    primitives::Rectangle,
    text::{
        renderer::{TextMetrics, TextRenderer},
        Baseline,
    },
};

use super::BitmapFont;

/// Character style rendering a [`BitmapFont`] in a single color.
///
/// Implements [`TextRenderer`], so the font plugs into
/// [`embedded_graphics::text::Text`] and other drawables that are generic
/// over a character style. Unset mask bits stay transparent; there is no
/// background fill.
#[derive(Clone, Copy, Debug)]
pub struct BitmapTextStyle<'a, C> {
    font: &'a BitmapFont<'a>,
    color: C,
}

impl<'a, C> BitmapTextStyle<'a, C> {
    /// Create a style from a font and a text color.
    pub const fn new(font: &'a BitmapFont<'a>, color: C) -> Self {
        Self { font, color }
    }

    /// Vertical pen offset for a baseline.
    ///
    /// Glyphs are anchored to the top of the line box and the blob carries
    /// no descender metric, so `Alphabetic` falls together with `Bottom`.
    fn baseline_offset(&self, baseline: Baseline) -> i32 {
        let height = i32::from(self.font.line_height());
        match baseline {
            Baseline::Top => 0,
            Baseline::Bottom | Baseline::Alphabetic => 1 - height,
            Baseline::Middle => (1 - height) / 2,
        }
    }

    /// Total pen advance for a string.
    fn advance(&self, text: &str) -> u32 {
        text.bytes()
            .map(|code| u32::from(self.font.char_advance(code)))
            .sum()
    }
}

impl<C> TextRenderer for BitmapTextStyle<'_, C>
where
    C: PixelColor,
{
    type Color = C;

    fn draw_string<D>(
        &self,
        text: &str,
        position: Point,
        baseline: Baseline,
        target: &mut D,
    ) -> Result<Point, D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let mut pen = position + Point::new(0, self.baseline_offset(baseline));
        for code in text.bytes() {
            // The trait only surfaces draw target errors; characters the
            // font cannot provide are skipped like unmapped codes.
            if let Ok(Some(glyph)) = self.font.glyph(code) {
                target.draw_iter(glyph.pixels(pen, self.color))?;
                pen.x += i32::from(glyph.x_advance());
            }
        }
        Ok(Point::new(pen.x, position.y))
    }

    fn draw_whitespace<D>(
        &self,
        width: u32,
        position: Point,
        _baseline: Baseline,
        _target: &mut D,
    ) -> Result<Point, D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        // Transparent background, nothing to fill
        Ok(position + Point::new(width as i32, 0))
    }

    fn measure_string(&self, text: &str, position: Point, baseline: Baseline) -> TextMetrics {
        let width = self.advance(text);
        let top_left = position + Point::new(0, self.baseline_offset(baseline));
        TextMetrics {
            bounding_box: Rectangle::new(
                top_left,
                Size::new(width, u32::from(self.font.line_height())),
            ),
            next_position: position + Point::new(width as i32, 0),
        }
    }

    fn line_height(&self) -> u32 {
        u32::from(self.font.line_height())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{mock_display::MockDisplay, pixelcolor::Rgb565, prelude::*};

    use super::*;

    // 1x1 glyphs: 'A' advances 3, 'B' advances 4
    #[rustfmt::skip]
    const BLOB: &[u8] = &[
        b'A', 1, 1, 0, 0, 3, 0x80,
        b'B', 1, 1, 0, 0, 4, 0x80,
        0,
    ];
    const FONT: BitmapFont<'static> = BitmapFont::new(BLOB, 8);

    #[test]
    fn draw_string_advances_pen_and_keeps_baseline() {
        let style = BitmapTextStyle::new(&FONT, Rgb565::WHITE);
        let mut display = MockDisplay::new();
        let next = style
            .draw_string("AB", Point::new(5, 9), Baseline::Top, &mut display)
            .unwrap();
        assert_eq!(next, Point::new(12, 9));
        assert_eq!(display.get_pixel(Point::new(5, 9)), Some(Rgb565::WHITE));
        assert_eq!(display.get_pixel(Point::new(8, 9)), Some(Rgb565::WHITE));
    }

    #[test]
    fn bottom_baseline_shifts_up_by_line_height() {
        let style = BitmapTextStyle::new(&FONT, Rgb565::WHITE);
        let mut display = MockDisplay::new();
        style
            .draw_string("A", Point::new(0, 9), Baseline::Bottom, &mut display)
            .unwrap();
        // line height 8: the glyph's top row lands at 9 + 1 - 8 = 2
        assert_eq!(display.get_pixel(Point::new(0, 2)), Some(Rgb565::WHITE));
    }

    #[test]
    fn unmapped_codes_are_skipped() {
        let style = BitmapTextStyle::new(&FONT, Rgb565::WHITE);
        let mut display = MockDisplay::new();
        let next = style
            .draw_string("AXB", Point::zero(), Baseline::Top, &mut display)
            .unwrap();
        assert_eq!(next, Point::new(7, 0));
    }

    #[test]
    fn measure_string_reports_advance_and_line_box() {
        let style = BitmapTextStyle::new(&FONT, Rgb565::WHITE);
        let metrics = style.measure_string("AB", Point::new(3, 4), Baseline::Top);
        assert_eq!(metrics.next_position, Point::new(10, 4));
        assert_eq!(
            metrics.bounding_box,
            Rectangle::new(Point::new(3, 4), Size::new(7, 8))
        );
        assert_eq!(style.line_height(), 8);
    }

    #[test]
    fn whitespace_advances_without_drawing() {
        let style = BitmapTextStyle::new(&FONT, Rgb565::WHITE);
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let next = style
            .draw_whitespace(5, Point::new(2, 2), Baseline::Top, &mut display)
            .unwrap();
        assert_eq!(next, Point::new(7, 2));
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(display.get_pixel(Point::new(x, y)), None);
            }
        }
    }
}
