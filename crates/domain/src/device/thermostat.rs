//! Smart thermostat — half-degree target temperature in a half-open range.

use super::{Adjustable, PowerState, SmartDevice};

/// A simulated thermostat.
///
/// The target temperature moves in half-degree steps. The lower bound is
/// inclusive and reachable; the upper bound is exclusive, so the highest
/// reachable target is one step below it (27.5). Every reachable value is
/// an exact multiple of 0.5 and therefore exactly representable, so the
/// bound checks never drift.
#[derive(Debug, Clone)]
pub struct SmartThermostat {
    name: String,
    power: PowerState,
    target_temperature: f64,
}

impl SmartThermostat {
    /// Lowest reachable target temperature (inclusive).
    pub const TEMPERATURE_MIN: f64 = 18.0;
    /// Upper bound on the target temperature (exclusive).
    pub const TEMPERATURE_MAX: f64 = 28.0;
    /// Size of one adjustment step.
    pub const TEMPERATURE_STEP: f64 = 0.5;
    /// Target temperature a fresh thermostat starts at.
    pub const DEFAULT_TEMPERATURE: f64 = 20.0;

    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power: PowerState::Off,
            target_temperature: Self::DEFAULT_TEMPERATURE,
        }
    }

    /// Current target temperature in degrees Celsius.
    #[must_use]
    pub fn target_temperature(&self) -> f64 {
        self.target_temperature
    }
}

impl SmartDevice for SmartThermostat {
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
            "SmartThermostat \"{}\" is {} with target temperature {:.1}\u{b0}C",
            self.name, self.power, self.target_temperature
        )
    }
}

impl Adjustable for SmartThermostat {
    fn increase_setting(&mut self) -> bool {
        if !self.power.is_on() {
            return false;
        }
        // Post-step check against the exclusive upper bound.
        if self.target_temperature + Self::TEMPERATURE_STEP < Self::TEMPERATURE_MAX {
            self.target_temperature += Self::TEMPERATURE_STEP;
            return true;
        }
        false
    }

    fn decrease_setting(&mut self) -> bool {
        if !self.power.is_on() {
            return false;
        }
        // Post-step check against the inclusive lower bound.
        if self.target_temperature - Self::TEMPERATURE_STEP >= Self::TEMPERATURE_MIN {
            self.target_temperature -= Self::TEMPERATURE_STEP;
            return true;
        }
        false
    }

    fn setting_summary(&self) -> String {
        format!(
            "target temperature {:.1}\u{b0}C (range {:.1}-{:.1})",
            self.target_temperature,
            Self::TEMPERATURE_MIN,
            Self::TEMPERATURE_MAX
        )
    }
}
