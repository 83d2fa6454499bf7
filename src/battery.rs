//! Battery state model.
//!
//! The watch battery spans 3300 mV (empty) to 4200 mV (full); capacity in
//! between is estimated by linear interpolation. Hardware access is out of
//! scope here: readings are fed in by the caller, or synthesized by the
//! drain simulation.

/// Battery voltage at 0 % capacity.
pub const EMPTY_MV: u16 = 3300;

/// Battery voltage at 100 % capacity.
pub const FULL_MV: u16 = 4200;

/// Millivolts per percent across the linear range.
const MV_PER_PERCENT: u16 = (FULL_MV - EMPTY_MV) / 100;

/// Runtime target on a full charge, used for the remaining-time estimate.
const FULL_CHARGE_HOURS: f32 = 24.0;

/// Estimate battery capacity in percent from a voltage in millivolts.
pub fn percent_from_millivolts(voltage: u16) -> u8 {
    if voltage >= FULL_MV {
        return 100;
    }
    if voltage <= EMPTY_MV {
        return 0;
    }
    // Use u32 during calculation to prevent overflow
    ((voltage - EMPTY_MV) as u32 * 100 / (FULL_MV - EMPTY_MV) as u32) as u8
}

/// Snapshot of the battery state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryInfo {
    /// Battery voltage in millivolts
    pub voltage_mv: u16,
    /// Battery capacity in percent (0–100)
    pub percent: u8,
}

/// Coarse charge classification for status display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargeLevel {
    Good,
    Ok,
    Low,
    Critical,
}

impl ChargeLevel {
    /// Classify a capacity percentage.
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            61.. => Self::Good,
            31..=60 => Self::Ok,
            16..=30 => Self::Low,
            _ => Self::Critical,
        }
    }
}

/// Warning emitted when the charge crosses a reserve threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryWarning {
    /// 20 % left, charge soon
    Low,
    /// 10 % left, charge immediately
    Critical,
}

/// Battery state with simulated drain.
#[derive(Clone, Copy, Debug)]
pub struct Battery {
    /// Battery voltage in millivolts
    voltage_mv: u16,
    /// Battery capacity in percent
    percent: u8,
}

impl Battery {
    /// Create battery state from an initial voltage reading.
    pub fn from_millivolts(voltage: u16) -> Self {
        Self {
            voltage_mv: voltage,
            percent: percent_from_millivolts(voltage),
        }
    }

    /// Return the current state of the battery.
    pub fn info(&self) -> BatteryInfo {
        BatteryInfo {
            voltage_mv: self.voltage_mv,
            percent: self.percent,
        }
    }

    /// Battery capacity in percent (0–100).
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Battery voltage in millivolts.
    pub fn voltage_mv(&self) -> u16 {
        self.voltage_mv
    }

    /// Charge classification of the current capacity.
    pub fn level(&self) -> ChargeLevel {
        ChargeLevel::from_percent(self.percent)
    }

    /// Store a new voltage reading. Returns whether the state changed.
    pub fn update(&mut self, voltage: u16) -> bool {
        let percent = percent_from_millivolts(voltage);
        let changed = voltage != self.voltage_mv || percent != self.percent;
        self.voltage_mv = voltage;
        self.percent = percent;
        changed
    }

    /// Simulated drain step: drop one percent and derive the matching
    /// voltage. Returns a warning when the charge reaches a reserve
    /// threshold.
    pub fn drain(&mut self) -> Option<BatteryWarning> {
        if self.percent > 0 {
            self.percent -= 1;
            self.voltage_mv = EMPTY_MV + u16::from(self.percent) * MV_PER_PERCENT;
        }
        match self.percent {
            20 => Some(BatteryWarning::Low),
            10 => Some(BatteryWarning::Critical),
            _ => None,
        }
    }

    /// Remaining runtime estimate in hours, assuming a day of use on a
    /// full charge.
    pub fn estimated_runtime_hours(&self) -> f32 {
        f32::from(self.percent) / 100.0 * FULL_CHARGE_HOURS
    }
}
