//! Smart home — the registry that creates, owns, and commands devices.

use crate::command::Command;
use crate::device::{Adjustable, Device, DeviceKind, SmartDevice};
use crate::error::{DeviceNotFoundError, HomeError, NotControllableError, ValidationError};

/// The owning registry of simulated devices.
///
/// Devices are stored in creation order for the registry's whole lifetime;
/// there is no removal. The registry is the only constructor of
/// [`Device`] values, and all mutation goes through
/// [`control_device`](Self::control_device).
#[derive(Debug)]
pub struct SmartHome {
    name: String,
    devices: Vec<Device>,
}

impl SmartHome {
    /// Create an empty registry with the given display label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            devices: Vec::new(),
        }
    }

    /// The registry's display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Devices in creation order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Number of devices in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Create a device from a type tag and append it to the registry.
    ///
    /// `type_tag` is matched case-insensitively against the canonical tags
    /// (`SmartLight`, `SmartThermostat`). Names are not required to be
    /// unique: a second device with an existing name is stored but shadowed
    /// for [`control_device`](Self::control_device), which always addresses
    /// the first match.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::UnknownType`] for an unrecognised tag and
    /// [`HomeError::Validation`] for an empty (or all-whitespace) name.
    /// The registry is unchanged on error.
    pub fn create_device(&mut self, type_tag: &str, name: &str) -> Result<&Device, HomeError> {
        let kind: DeviceKind = type_tag.parse()?;
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let index = self.devices.len();
        self.devices.push(Device::new(kind, name));
        Ok(&self.devices[index])
    }

    /// Look up a device by exact name and apply a one-character command.
    ///
    /// The first device whose name matches is addressed. Every successful
    /// dispatch returns `Ok(true)`, including a `'+'` or `'-'` that had no
    /// effect because the device was powered off or already at a bound;
    /// such refusals are normal outcomes, not failures.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device carries `name`,
    /// [`HomeError::InvalidCommand`] when `command` is outside the
    /// `{'0', '1', '+', '-'}` alphabet, and [`HomeError::NotControllable`]
    /// when an adjust command addresses a device without the
    /// [`Adjustable`] capability. Checks run in that order.
    pub fn control_device(&mut self, name: &str, command: char) -> Result<bool, HomeError> {
        let device = self
            .devices
            .iter_mut()
            .find(|device| device.name() == name)
            .ok_or_else(|| DeviceNotFoundError {
                name: name.to_string(),
            })?;
        let command = Command::try_from(command)?;

        match command {
            Command::TurnOn => device.turn_on(),
            Command::TurnOff => device.turn_off(),
            Command::Increase => {
                Self::adjustable(device, name)?.increase_setting();
            }
            Command::Decrease => {
                Self::adjustable(device, name)?.decrease_setting();
            }
        }
        Ok(true)
    }

    /// Capability check for the adjust commands, performed at dispatch time.
    fn adjustable<'a>(
        device: &'a mut Device,
        name: &str,
    ) -> Result<&'a mut dyn Adjustable, HomeError> {
        device.as_adjustable_mut().ok_or_else(|| {
            NotControllableError {
                name: name.to_string(),
            }
            .into()
        })
    }
}
