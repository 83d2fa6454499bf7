//! UI definitions module

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::{battery::BatteryInfo, font::Error};

mod digital;

pub use digital::DigitalFace;

/// A renderable watch face.
pub trait WatchFace {
    /// Create new watchface
    fn new() -> Self;

    /// Draw the face for the given state.
    fn draw<D>(&mut self, target: &mut D, state: &WatchFaceState) -> Result<(), Error<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>;
}

/// State for the watch face
#[derive(Clone, Copy, Debug)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
    pub battery: BatteryInfo,
}
