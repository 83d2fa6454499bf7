//! Digital watch face: time in the center, battery status bottom left.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point,
    pixelcolor::{Rgb565, RgbColor, WebColors},
    text::{Baseline, Text},
    Drawable,
};

use super::{WatchFace, WatchFaceState};
use crate::{
    battery::ChargeLevel,
    clock::{format_time, TimeFormat},
    font::{BitmapTextStyle, Error, FONT_5X7},
};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

const MARGIN: u16 = 20;

const BUF_LEN: usize = 16;

/// Digital watch face for a 240x240 display.
pub struct DigitalFace {
    /// Time display format
    pub format: TimeFormat,
}

impl DigitalFace {
    /// Battery label color for a charge level.
    fn battery_color(level: ChargeLevel) -> Rgb565 {
        match level {
            ChargeLevel::Good => Rgb565::GREEN,
            ChargeLevel::Ok => Rgb565::YELLOW,
            ChargeLevel::Low => Rgb565::CSS_ORANGE,
            ChargeLevel::Critical => Rgb565::RED,
        }
    }
}

impl WatchFace for DigitalFace {
    fn new() -> Self {
        Self {
            format: TimeFormat::default(),
        }
    }

    fn draw<D>(&mut self, target: &mut D, state: &WatchFaceState) -> Result<(), Error<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        // Show time in the center
        let mut buf = [0u8; BUF_LEN];
        let str = format_time(&mut buf, state.time.time(), &self.format).unwrap();
        let style = BitmapTextStyle::new(&FONT_5X7, Rgb565::WHITE);
        Text::with_baseline(
            str,
            Point::new(i32::from(LCD_W) / 2 - 40, i32::from(LCD_H) / 2 + 10),
            style,
            Baseline::Top,
        )
        .draw(target)
        .map_err(Error::Display)?;

        // Show battery status in bottom left corner
        let mut buf = [0u8; BUF_LEN];
        let str = format_no_std::show(&mut buf, format_args!("{}%", state.battery.percent)).unwrap();
        let level = ChargeLevel::from_percent(state.battery.percent);
        let style = BitmapTextStyle::new(&FONT_5X7, Self::battery_color(level));
        Text::with_baseline(
            str,
            Point::new(i32::from(MARGIN), i32::from(LCD_H - MARGIN)),
            style,
            Baseline::Top,
        )
        .draw(target)
        .map_err(Error::Display)?;

        Ok(())
    }
}
