//! Home service — use-cases over the device registry.

use homesim_domain::command::Command;
use homesim_domain::device::{Device, DeviceKind, PowerState, SmartDevice};
use homesim_domain::error::HomeError;
use homesim_domain::event::{DeviceEvent, DeviceEventKind};
use homesim_domain::home::SmartHome;
use serde::{Deserialize, Serialize};

use crate::ports::EventPublisher;

/// Read-only listing row for one device.
///
/// This is the shape presentation and scripting layers consume; it carries
/// no handle back to the underlying device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    /// Device name (registry identity).
    pub name: String,
    /// Device category.
    pub kind: DeviceKind,
    /// Current power state.
    pub power: PowerState,
    /// One-line report of the device's full state.
    pub summary: String,
    /// Setting report with its valid range; `None` for kinds without the
    /// bounded-setting capability.
    pub setting_summary: Option<String>,
}

impl From<&Device> for DeviceSnapshot {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name().to_string(),
            kind: device.kind(),
            power: device.power(),
            summary: device.summary(),
            setting_summary: device
                .as_adjustable()
                .map(|adjustable| adjustable.setting_summary()),
        }
    }
}

/// Application service owning the registry.
///
/// Holds the [`SmartHome`] exclusively; the `&mut self` receivers on the
/// mutating use-cases make the single-writer rule a compile-time property.
/// One event is published per state-changing operation, none on error.
pub struct HomeService<P> {
    home: SmartHome,
    publisher: P,
}

impl<P: EventPublisher> HomeService<P> {
    /// Create a service around an existing registry.
    pub fn new(home: SmartHome, publisher: P) -> Self {
        Self { home, publisher }
    }

    /// The registry's display label.
    #[must_use]
    pub fn home_name(&self) -> &str {
        self.home.name()
    }

    /// Number of devices in the registry.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.home.len()
    }

    /// Create a device from a case-insensitive type tag and a name.
    ///
    /// Publishes [`DeviceEventKind::Added`] and returns the snapshot of the
    /// freshly created device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::UnknownType`] for an unrecognised tag and
    /// [`HomeError::Validation`] for an empty name.
    #[tracing::instrument(skip(self))]
    pub fn create_device(
        &mut self,
        type_tag: &str,
        name: &str,
    ) -> Result<DeviceSnapshot, HomeError> {
        let snapshot = DeviceSnapshot::from(self.home.create_device(type_tag, name)?);
        tracing::info!(device = %snapshot.name, kind = %snapshot.kind, "device created");
        self.publisher.publish(DeviceEvent::new(
            snapshot.name.clone(),
            DeviceEventKind::Added {
                kind: snapshot.kind,
            },
        ));
        Ok(snapshot)
    }

    /// Dispatch a one-character command to the named device.
    ///
    /// Publishes [`DeviceEventKind::PowerChanged`] for `'1'`/`'0'` and
    /// [`DeviceEventKind::SettingAdjusted`] for `'+'`/`'-'`. A refused
    /// adjustment (device off or at a bound) still returns `Ok(true)`; the
    /// event's `applied` flag carries the difference.
    ///
    /// # Errors
    ///
    /// Propagates [`HomeError::NotFound`], [`HomeError::InvalidCommand`],
    /// and [`HomeError::NotControllable`] from the registry. No event is
    /// published on error.
    #[tracing::instrument(skip(self))]
    pub fn control_device(&mut self, name: &str, command: char) -> Result<bool, HomeError> {
        let before = self.snapshot_of(name);
        let dispatched = self.home.control_device(name, command)?;
        // Dispatch succeeded, so the symbol is known to parse.
        let command = Command::try_from(command)?;
        if let (Some(before), Some(after)) = (before, self.snapshot_of(name)) {
            self.publish_outcome(command, &before, after);
        }
        Ok(dispatched)
    }

    /// Snapshots of every device, in creation order.
    #[must_use]
    pub fn list_devices(&self) -> Vec<DeviceSnapshot> {
        self.home.devices().iter().map(DeviceSnapshot::from).collect()
    }

    fn snapshot_of(&self, name: &str) -> Option<DeviceSnapshot> {
        self.home
            .devices()
            .iter()
            .find(|device| device.name() == name)
            .map(DeviceSnapshot::from)
    }

    fn publish_outcome(&self, command: Command, before: &DeviceSnapshot, after: DeviceSnapshot) {
        let kind = if command.requires_adjustable() {
            let applied = before.setting_summary != after.setting_summary;
            if applied {
                tracing::info!(device = %after.name, "setting adjusted");
            } else {
                tracing::debug!(device = %after.name, "adjustment refused (at limit or powered off)");
            }
            DeviceEventKind::SettingAdjusted {
                applied,
                summary: after.setting_summary.clone().unwrap_or_default(),
            }
        } else {
            tracing::info!(device = %after.name, power = %after.power, "power state changed");
            DeviceEventKind::PowerChanged { power: after.power }
        };
        self.publisher.publish(DeviceEvent::new(after.name, kind));
    }
}
