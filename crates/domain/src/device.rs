//! Device — the capability traits and the tagged union over concrete kinds.
//!
//! Every device exposes the base [`SmartDevice`] capability (identity plus
//! power). Kinds with one bounded numeric setting additionally implement
//! [`Adjustable`]. The [`Device`] enum is what the registry stores; commands
//! reach the concrete kinds through match delegation, and the optional
//! capability is reached through an explicit query
//! ([`Device::as_adjustable`]) rather than downcasting.

use serde::{Deserialize, Serialize};

use crate::error::UnknownTypeError;

mod light;
mod thermostat;

pub use light::SmartLight;
pub use thermostat::SmartThermostat;

/// Discrete power state of a device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    /// Whether this is the powered-on state.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// The known device categories.
///
/// Each kind has a canonical type tag; the registry matches tags
/// case-insensitively, so `"smartlight"` and `"SMARTLIGHT"` both resolve
/// to [`DeviceKind::Light`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Thermostat,
}

impl DeviceKind {
    /// The canonical type tag for this kind.
    #[must_use]
    pub fn type_tag(self) -> &'static str {
        match self {
            Self::Light => "SmartLight",
            Self::Thermostat => "SmartThermostat",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_tag())
    }
}

impl std::str::FromStr for DeviceKind {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("SmartLight") {
            Ok(Self::Light)
        } else if s.eq_ignore_ascii_case("SmartThermostat") {
            Ok(Self::Thermostat)
        } else {
            Err(UnknownTypeError {
                type_tag: s.to_string(),
            })
        }
    }
}

/// Base capability every simulated device exposes.
///
/// Identity (the name) is immutable after creation; power is the one state
/// axis shared by all kinds. Turning a device on or off is idempotent.
pub trait SmartDevice {
    /// The device's name, its identity within a registry.
    fn name(&self) -> &str;

    /// Current power state.
    fn power(&self) -> PowerState;

    /// Set the power state to [`PowerState::On`].
    fn turn_on(&mut self);

    /// Set the power state to [`PowerState::Off`].
    fn turn_off(&mut self);

    /// One-line human-readable report of the device's full state.
    ///
    /// Pure report; mutates nothing.
    fn summary(&self) -> String;

    /// Whether the device is powered on.
    fn is_on(&self) -> bool {
        self.power().is_on()
    }
}

/// Bounded-setting capability: one numeric setting that moves up or down by
/// a fixed step, gated on power.
///
/// A `false` from the adjust operations is a normal outcome (the device is
/// powered off, or the step would leave the valid range), never an error.
/// The setting is left untouched in that case.
pub trait Adjustable: SmartDevice {
    /// Raise the setting by one step.
    ///
    /// Returns `false` without mutating when the device is powered off or
    /// the step would leave the valid range.
    fn increase_setting(&mut self) -> bool;

    /// Lower the setting by one step; symmetric to
    /// [`increase_setting`](Self::increase_setting) at the lower bound.
    fn decrease_setting(&mut self) -> bool;

    /// Human-readable report of the current setting and its valid range.
    fn setting_summary(&self) -> String;
}

/// Tagged union over the concrete device kinds.
///
/// Constructed only by the registry ([`SmartHome`](crate::home::SmartHome));
/// collaborators observe devices through shared references and mutate them
/// only through the registry's command dispatch.
#[derive(Debug, Clone)]
pub enum Device {
    Light(SmartLight),
    Thermostat(SmartThermostat),
}

impl Device {
    /// Create a device of the given kind with its documented default
    /// setting, powered off.
    pub(crate) fn new(kind: DeviceKind, name: impl Into<String>) -> Self {
        match kind {
            DeviceKind::Light => Self::Light(SmartLight::new(name)),
            DeviceKind::Thermostat => Self::Thermostat(SmartThermostat::new(name)),
        }
    }

    /// Which category this device belongs to.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Thermostat(_) => DeviceKind::Thermostat,
        }
    }

    /// Capability query: the bounded-setting view of this device, when the
    /// kind implements it.
    ///
    /// Both current kinds do; the `None` path is what keeps dispatch honest
    /// when a kind without the capability is added.
    #[must_use]
    pub fn as_adjustable(&self) -> Option<&dyn Adjustable> {
        match self {
            Self::Light(light) => Some(light),
            Self::Thermostat(thermostat) => Some(thermostat),
        }
    }

    /// Mutable variant of [`as_adjustable`](Self::as_adjustable), used by
    /// the registry when dispatching an adjust command.
    pub(crate) fn as_adjustable_mut(&mut self) -> Option<&mut dyn Adjustable> {
        match self {
            Self::Light(light) => Some(light),
            Self::Thermostat(thermostat) => Some(thermostat),
        }
    }
}

impl SmartDevice for Device {
    fn name(&self) -> &str {
        match self {
            Self::Light(light) => light.name(),
            Self::Thermostat(thermostat) => thermostat.name(),
        }
    }

    fn power(&self) -> PowerState {
        match self {
            Self::Light(light) => light.power(),
            Self::Thermostat(thermostat) => thermostat.power(),
        }
    }

    fn turn_on(&mut self) {
        match self {
            Self::Light(light) => light.turn_on(),
            Self::Thermostat(thermostat) => thermostat.turn_on(),
        }
    }

    fn turn_off(&mut self) {
        match self {
            Self::Light(light) => light.turn_off(),
            Self::Thermostat(thermostat) => thermostat.turn_off(),
        }
    }

    fn summary(&self) -> String {
        match self {
            Self::Light(light) => light.summary(),
            Self::Thermostat(thermostat) => thermostat.summary(),
        }
    }
}
