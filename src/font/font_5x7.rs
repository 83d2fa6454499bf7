//! Built-in 5x7 pixel font.
//!
//! Covers the characters the digital watch face needs: digits, colon,
//! percent, slash, and the letters of the `AM`/`PM` and charge/discharge
//! markers. Advances are proportional (glyph width + 1).

use super::BitmapFont;

/// 5x7 proportional font with an 8 px line advance.
pub const FONT_5X7: BitmapFont<'static> = BitmapFont::new(FONT_5X7_DATA, 8);

#[rustfmt::skip]
const FONT_5X7_DATA: &[u8] = &[
    // ' '
    0x20, 0x00, 0x00, 0x00, 0x00, 0x03,
    // '%'
    0x25, 0x05, 0x07, 0x00, 0x00, 0x06,
    0xCE, 0x84, 0x44, 0x2E, 0x60,
    // '/'
    0x2F, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x08, 0x84, 0x44, 0x22, 0x00,
    // '0'
    0x30, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x74, 0x67, 0x5C, 0xC5, 0xC0,
    // '1'
    0x31, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x23, 0x08, 0x42, 0x11, 0xC0,
    // '2'
    0x32, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x74, 0x42, 0x22, 0x23, 0xE0,
    // '3'
    0x33, 0x05, 0x07, 0x00, 0x00, 0x06,
    0xF8, 0x88, 0x20, 0xC5, 0xC0,
    // '4'
    0x34, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x11, 0x95, 0x2F, 0x88, 0x40,
    // '5'
    0x35, 0x05, 0x07, 0x00, 0x00, 0x06,
    0xFC, 0x3C, 0x10, 0xC5, 0xC0,
    // '6'
    0x36, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x32, 0x21, 0xE8, 0xC5, 0xC0,
    // '7'
    0x37, 0x05, 0x07, 0x00, 0x00, 0x06,
    0xF8, 0x44, 0x44, 0x21, 0x00,
    // '8'
    0x38, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x74, 0x62, 0xE8, 0xC5, 0xC0,
    // '9'
    0x39, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x74, 0x62, 0xF0, 0x89, 0x80,
    // ':'
    0x3A, 0x02, 0x07, 0x00, 0x00, 0x03,
    0x3C, 0xF0,
    // 'A'
    0x41, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x74, 0x63, 0xF8, 0xC6, 0x20,
    // 'C'
    0x43, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x74, 0x61, 0x08, 0x45, 0xC0,
    // 'D'
    0x44, 0x05, 0x07, 0x00, 0x00, 0x06,
    0xF4, 0x63, 0x18, 0xC7, 0xC0,
    // 'M'
    0x4D, 0x05, 0x07, 0x00, 0x00, 0x06,
    0x8E, 0xEB, 0x58, 0xC6, 0x20,
    // 'P'
    0x50, 0x05, 0x07, 0x00, 0x00, 0x06,
    0xF4, 0x63, 0xE8, 0x42, 0x00,
    // sentinel
    0x00,
];

#[cfg(test)]
mod tests {
    use embedded_graphics::{mock_display::MockDisplay, pixelcolor::Rgb565, prelude::*};

    use super::*;

    #[test]
    fn covers_the_watch_face_character_set() {
        for code in b" %/0123456789:ACDMP" {
            assert!(
                FONT_5X7.glyph(*code).unwrap().is_some(),
                "missing glyph {}",
                *code as char
            );
        }
    }

    #[test]
    fn blob_is_well_formed() {
        // a miss must walk every record and reach the sentinel
        assert_eq!(FONT_5X7.glyph(1).unwrap(), None);
    }

    #[test]
    fn digits_share_metrics() {
        for code in b"0123456789" {
            let glyph = FONT_5X7.glyph(*code).unwrap().unwrap();
            assert_eq!(glyph.width(), 5);
            assert_eq!(glyph.height(), 7);
            assert_eq!(glyph.x_advance(), 6);
        }
        assert_eq!(FONT_5X7.char_advance(b':'), 3);
        assert_eq!(FONT_5X7.char_advance(b' '), 3);
    }

    #[test]
    fn rendered_glyph_matches_its_mask() {
        let glyph = FONT_5X7.glyph(b'1').unwrap().unwrap();
        let mut display = MockDisplay::new();
        FONT_5X7
            .draw_char(&mut display, Point::zero(), b'1', Rgb565::WHITE)
            .unwrap();
        for row in 0..7 {
            for col in 0..5 {
                let expected = glyph.pixel_on(col, row).then_some(Rgb565::WHITE);
                let point = Point::new(i32::from(col), i32::from(row));
                assert_eq!(display.get_pixel(point), expected);
            }
        }
    }

    #[test]
    fn one_glyph_shape_spot_check() {
        // '1': stem in the middle column, serif base
        let glyph = FONT_5X7.glyph(b'1').unwrap().unwrap();
        assert!(glyph.pixel_on(2, 0));
        assert!(glyph.pixel_on(1, 1));
        assert!(glyph.pixel_on(2, 3));
        assert!(glyph.pixel_on(1, 6));
        assert!(glyph.pixel_on(3, 6));
        assert!(!glyph.pixel_on(0, 0));
        assert!(!glyph.pixel_on(4, 3));
    }
}
