//! Packed bitmap font decoding and rendering.
//!
//! A font is a flat binary blob of tightly packed, variable length character
//! records, terminated by a single zero byte. Each record:
//!
//! | field    | size                  |
//! |----------|-----------------------|
//! | code     | 1 byte                |
//! | width    | 1 byte                |
//! | height   | 1 byte                |
//! | xOffset  | 1 byte                |
//! | yOffset  | 1 byte                |
//! | xAdvance | 1 byte                |
//! | bitmap   | ceil(width*height/8)  |
//!
//! The bitmap is a row-major, MSB-first 1-bit-per-pixel mask. Records carry
//! no index; lookup is a linear scan that derives each record's length from
//! its own width and height fields. Every access is bounds checked against
//! the blob, so a truncated or unterminated blob is reported as
//! [`FontError::Malformed`] instead of being scanned past its end.

use embedded_graphics::{draw_target::DrawTarget, geometry::Point, pixelcolor::PixelColor, Pixel};

mod font_5x7;
mod style;

pub use font_5x7::FONT_5X7;
pub use style::BitmapTextStyle;

/// Record bytes before the bitmap data.
const HEADER_LEN: usize = 6;

/// Packed bitmap size for a glyph of the given dimensions.
const fn bitmap_len(width: u8, height: u8) -> usize {
    (width as usize * height as usize + 7) / 8
}

/// Error in the font data itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// A record claims more data than the blob contains, or the blob ends
    /// without a sentinel record.
    Malformed,
}

/// Error returned by the drawing entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The font data is malformed.
    Font(FontError),
    /// The draw target reported an error.
    Display(E),
}

/// An immutable packed bitmap font.
///
/// The blob is read-only shared data; the font never copies or mutates it.
#[derive(Clone, Copy, Debug)]
pub struct BitmapFont<'a> {
    data: &'a [u8],
    line_height: u8,
}

impl<'a> BitmapFont<'a> {
    /// Create a font over a record blob.
    ///
    /// The blob does not encode a line metric, so the line advance in pixels
    /// is passed alongside it.
    pub const fn new(data: &'a [u8], line_height: u8) -> Self {
        Self { data, line_height }
    }

    /// Line advance in pixels.
    pub const fn line_height(&self) -> u8 {
        self.line_height
    }

    /// Look up the record for a character code.
    ///
    /// Returns `Ok(None)` when the scan reaches the sentinel without a
    /// match. Absent codes and glyphs that were never part of the font are
    /// indistinguishable.
    pub fn glyph(&self, code: u8) -> Result<Option<Glyph<'a>>, FontError> {
        let mut offset = 0;
        loop {
            match self.data.get(offset) {
                None => return Err(FontError::Malformed),
                Some(&0) => return Ok(None),
                Some(&c) => {
                    let header = self
                        .data
                        .get(offset..offset + HEADER_LEN)
                        .ok_or(FontError::Malformed)?;
                    let width = header[1];
                    let height = header[2];
                    let end = offset + HEADER_LEN + bitmap_len(width, height);
                    if end > self.data.len() {
                        return Err(FontError::Malformed);
                    }
                    if c == code {
                        return Ok(Some(Glyph {
                            code: c,
                            width,
                            height,
                            x_offset: header[3],
                            y_offset: header[4],
                            x_advance: header[5],
                            bitmap: &self.data[offset + HEADER_LEN..end],
                        }));
                    }
                    offset = end;
                }
            }
        }
    }

    /// Pen advance for a character code.
    ///
    /// Returns 0 when the font has no glyph for `code` (or the data is
    /// malformed), matching the silent degradation of [`draw_char`].
    ///
    /// [`draw_char`]: Self::draw_char
    pub fn char_advance(&self, code: u8) -> u8 {
        match self.glyph(code) {
            Ok(Some(glyph)) => glyph.x_advance(),
            _ => 0,
        }
    }

    /// Draw a single character with its top-left pen position at `position`.
    ///
    /// Only the set mask bits are written; the background is left untouched.
    /// An unmapped code draws nothing and returns an advance of 0. Returns
    /// the pen advance for the drawn glyph.
    pub fn draw_char<D>(
        &self,
        target: &mut D,
        position: Point,
        code: u8,
        color: D::Color,
    ) -> Result<u8, Error<D::Error>>
    where
        D: DrawTarget,
    {
        match self.glyph(code).map_err(Error::Font)? {
            Some(glyph) => {
                target
                    .draw_iter(glyph.pixels(position, color))
                    .map_err(Error::Display)?;
                Ok(glyph.x_advance())
            }
            None => Ok(0),
        }
    }

    /// Draw a single line of text left to right, starting at `position`.
    ///
    /// `text` is treated as a sequence of single-byte character codes; the
    /// pen advances by each glyph's advance width and the returned point is
    /// the final pen position. No wrapping, no newline handling.
    pub fn draw_text<D>(
        &self,
        target: &mut D,
        position: Point,
        text: &str,
        color: D::Color,
    ) -> Result<Point, Error<D::Error>>
    where
        D: DrawTarget,
    {
        let mut pen = position;
        for code in text.bytes() {
            pen.x += i32::from(self.draw_char(target, pen, code, color)?);
        }
        Ok(pen)
    }
}

/// A single decoded character record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    code: u8,
    width: u8,
    height: u8,
    x_offset: u8,
    y_offset: u8,
    x_advance: u8,
    bitmap: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Character code of this record.
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Bitmap width in pixels.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bitmap height in pixels.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Horizontal draw offset from the pen position.
    pub fn x_offset(&self) -> u8 {
        self.x_offset
    }

    /// Vertical draw offset from the pen position.
    pub fn y_offset(&self) -> u8 {
        self.y_offset
    }

    /// Pen advance after drawing this glyph.
    pub fn x_advance(&self) -> u8 {
        self.x_advance
    }

    /// Whether the mask bit at (`col`, `row`) is set.
    pub fn pixel_on(&self, col: u8, row: u8) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let index = row as usize * self.width as usize + col as usize;
        match self.bitmap.get(index / 8) {
            Some(byte) => byte & (0x80 >> (index % 8)) != 0,
            None => false,
        }
    }

    /// Pixels to blit for the set mask bits, offset from `origin`.
    pub fn pixels<C>(&self, origin: Point, color: C) -> GlyphPixels<'a, C>
    where
        C: PixelColor,
    {
        GlyphPixels {
            glyph: *self,
            origin,
            color,
            index: 0,
        }
    }
}

/// Iterator over the set mask bits of a glyph, as draw-ready pixels.
///
/// Created by [`Glyph::pixels`].
#[derive(Clone, Copy, Debug)]
pub struct GlyphPixels<'a, C> {
    glyph: Glyph<'a>,
    origin: Point,
    color: C,
    index: usize,
}

impl<C> Iterator for GlyphPixels<'_, C>
where
    C: PixelColor,
{
    type Item = Pixel<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let width = usize::from(self.glyph.width);
        let total = width * usize::from(self.glyph.height);
        while self.index < total {
            let index = self.index;
            self.index += 1;
            let (col, row) = ((index % width) as u8, (index / width) as u8);
            if self.glyph.pixel_on(col, row) {
                return Some(Pixel(
                    Point::new(
                        self.origin.x + i32::from(col) + i32::from(self.glyph.x_offset),
                        self.origin.y + i32::from(row) + i32::from(self.glyph.y_offset),
                    ),
                    self.color,
                ));
            }
        }
        None
    }
}
