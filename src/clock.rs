//! Clock face state and time formatting.
//!
//! All timestamps are caller supplied monotonic milliseconds; the crate
//! keeps no clock of its own.

use core::fmt;

use chrono::{NaiveTime, Timelike};

/// Brightness in percent while the wearer interacts with the watch.
const ACTIVE_BRIGHTNESS: u8 = 80;

/// Dimmest the auto-dim policy will go.
const DIM_FLOOR: u8 = 30;

/// Brightness drop per dim poll.
const DIM_STEP: u8 = 10;

/// Idle time before dimming starts.
const DIM_AFTER_MS: u64 = 30_000;

/// Recent-interaction window that restores full brightness.
const RESTORE_WITHIN_MS: u64 = 5_000;

/// Time display format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeFormat {
    /// 24-hour clock when set, 12-hour with AM/PM suffix otherwise
    pub use_24h: bool,
    /// Append seconds
    pub show_seconds: bool,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            use_24h: true,
            show_seconds: true,
        }
    }
}

/// Format a time of day into `buf` according to `format`.
pub fn format_time<'a>(
    buf: &'a mut [u8],
    time: NaiveTime,
    format: &TimeFormat,
) -> Result<&'a str, fmt::Error> {
    let (hour, minute, second) = (time.hour(), time.minute(), time.second());
    let shown = if format.use_24h {
        if format.show_seconds {
            format_no_std::show(buf, format_args!("{:02}:{:02}:{:02}", hour, minute, second))
        } else {
            format_no_std::show(buf, format_args!("{:02}:{:02}", hour, minute))
        }
    } else {
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        if format.show_seconds {
            format_no_std::show(
                buf,
                format_args!("{}:{:02}:{:02} {}", hour12, minute, second, suffix),
            )
        } else {
            format_no_std::show(buf, format_args!("{}:{:02} {}", hour12, minute, suffix))
        }
    };
    shown.map_err(|_| fmt::Error)
}

/// Explicit clock face state.
///
/// Replaces the demo-style process-wide globals with a struct the caller
/// owns and passes by reference.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    /// Backlight brightness in percent
    pub brightness: u8,
    /// Whether the display is on
    pub display_on: bool,
    /// Time display format
    pub format: TimeFormat,
    last_interaction_ms: u64,
}

impl ClockState {
    /// Initialize clock state on boot.
    pub fn new(now_ms: u64) -> Self {
        Self {
            brightness: ACTIVE_BRIGHTNESS,
            display_on: true,
            format: TimeFormat::default(),
            last_interaction_ms: now_ms,
        }
    }

    /// Register a wearer interaction (touch, button). Wakes the display.
    pub fn register_interaction(&mut self, now_ms: u64) {
        self.last_interaction_ms = now_ms;
        self.display_on = true;
    }

    /// Milliseconds since the last interaction.
    pub fn idle_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_interaction_ms)
    }

    /// Apply the auto-dim/restore policy. Returns whether the brightness
    /// changed.
    ///
    /// After 30 s idle the brightness steps down by 10 per poll until it
    /// reaches the floor; an interaction within the last 5 s restores full
    /// brightness in one step.
    pub fn poll_brightness(&mut self, now_ms: u64) -> bool {
        let idle = self.idle_ms(now_ms);
        if idle > DIM_AFTER_MS && self.brightness > DIM_FLOOR {
            self.brightness = self.brightness.saturating_sub(DIM_STEP).max(DIM_FLOOR);
            true
        } else if idle < RESTORE_WITHIN_MS && self.brightness < ACTIVE_BRIGHTNESS {
            self.brightness = ACTIVE_BRIGHTNESS;
            true
        } else {
            false
        }
    }
}

/// Periodic update gate over caller supplied milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period_ms: u64,
    last_ms: u64,
}

impl Interval {
    /// Create a gate that opens once per `period_ms`.
    pub fn every(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_ms: 0,
        }
    }

    /// Whether the period has elapsed; re-arms the gate when it has.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) > self.period_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn formats_24h() {
        let mut buf = [0u8; 16];
        let format = TimeFormat::default();
        assert_eq!(
            format_time(&mut buf, time(9, 5, 7), &format).unwrap(),
            "09:05:07"
        );

        let format = TimeFormat {
            show_seconds: false,
            ..format
        };
        assert_eq!(format_time(&mut buf, time(9, 5, 7), &format).unwrap(), "09:05");
    }

    #[test]
    fn formats_12h_edges() {
        let mut buf = [0u8; 16];
        let format = TimeFormat {
            use_24h: false,
            show_seconds: false,
        };
        assert_eq!(
            format_time(&mut buf, time(0, 30, 0), &format).unwrap(),
            "12:30 AM"
        );
        assert_eq!(
            format_time(&mut buf, time(12, 0, 0), &format).unwrap(),
            "12:00 PM"
        );
        assert_eq!(
            format_time(&mut buf, time(23, 59, 0), &format).unwrap(),
            "11:59 PM"
        );

        let format = TimeFormat {
            use_24h: false,
            show_seconds: true,
        };
        assert_eq!(
            format_time(&mut buf, time(13, 2, 3), &format).unwrap(),
            "1:02:03 PM"
        );
    }

    #[test]
    fn format_fails_on_short_buffer() {
        let mut buf = [0u8; 4];
        assert!(format_time(&mut buf, time(9, 5, 7), &TimeFormat::default()).is_err());
    }

    #[test]
    fn dims_after_idle_down_to_floor() {
        let mut state = ClockState::new(0);
        assert!(!state.poll_brightness(29_000));
        assert_eq!(state.brightness, 80);

        let mut polls = 0;
        while state.poll_brightness(31_000) {
            polls += 1;
        }
        assert_eq!(polls, 5);
        assert_eq!(state.brightness, 30);
    }

    #[test]
    fn interaction_restores_brightness() {
        let mut state = ClockState::new(0);
        while state.poll_brightness(31_000) {}
        assert_eq!(state.brightness, 30);

        state.register_interaction(40_000);
        assert!(state.poll_brightness(41_000));
        assert_eq!(state.brightness, 80);
        assert!(state.display_on);
    }

    #[test]
    fn interval_gates_by_period() {
        let mut interval = Interval::every(1_000);
        assert!(!interval.ready(500));
        assert!(interval.ready(1_001));
        assert!(!interval.ready(1_500));
        assert!(interval.ready(2_002));
    }
}
