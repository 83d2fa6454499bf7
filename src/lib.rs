//! Watch face library for T-Watch class smartwatches.
//!
//! Provides a packed bitmap font decoder/renderer on top of
//! [`embedded_graphics`], together with the battery and clock state a simple
//! digital watch face needs. The crate performs no hardware access of its
//! own: voltage readings, timestamps and the draw target are all supplied by
//! the caller.

#![no_std]

pub mod battery;
pub mod clock;
pub mod font;
pub mod ui;

pub use battery::{Battery, BatteryInfo, ChargeLevel};
pub use clock::{ClockState, TimeFormat};
pub use font::{BitmapFont, BitmapTextStyle, FontError, Glyph, FONT_5X7};
pub use ui::{DigitalFace, WatchFace, WatchFaceState};
