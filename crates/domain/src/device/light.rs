//! Smart light — whole-step brightness inside an inclusive 0..=10 range.

use super::{Adjustable, PowerState, SmartDevice};

/// A simulated dimmable light.
///
/// Brightness moves in whole steps and both bounds are reachable; a fresh
/// light starts at [`DEFAULT_BRIGHTNESS`](Self::DEFAULT_BRIGHTNESS),
/// powered off.
#[derive(Debug, Clone)]
pub struct SmartLight {
    name: String,
    power: PowerState,
    brightness: u8,
}

impl SmartLight {
    /// Lowest reachable brightness.
    pub const BRIGHTNESS_MIN: u8 = 0;
    /// Highest reachable brightness (inclusive).
    pub const BRIGHTNESS_MAX: u8 = 10;
    /// Brightness a fresh light starts at.
    pub const DEFAULT_BRIGHTNESS: u8 = 5;

    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power: PowerState::Off,
            brightness: Self::DEFAULT_BRIGHTNESS,
        }
    }

    /// Current brightness.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl SmartDevice for SmartLight {
    fn name(&self) -> &str {
        &self.name
    }

    fn power(&self) -> PowerState {
        self.power
    }

    fn turn_on(&mut self) {
        self.power = PowerState::On;
    }

    fn turn_off(&mut self) {
        self.power = PowerState::Off;
    }

    fn summary(&self) -> String {
        format!(
            "SmartLight \"{}\" is {} with brightness {}",
            self.name, self.power, self.brightness
        )
    }
}

impl Adjustable for SmartLight {
    fn increase_setting(&mut self) -> bool {
        if !self.power.is_on() {
            return false;
        }
        if self.brightness < Self::BRIGHTNESS_MAX {
            self.brightness += 1;
            return true;
        }
        false
    }

    fn decrease_setting(&mut self) -> bool {
        if !self.power.is_on() {
            return false;
        }
        if self.brightness > Self::BRIGHTNESS_MIN {
            self.brightness -= 1;
            return true;
        }
        false
    }

    fn setting_summary(&self) -> String {
        format!(
            "brightness {} (range {}-{})",
            self.brightness,
            Self::BRIGHTNESS_MIN,
            Self::BRIGHTNESS_MAX
        )
    }
}
