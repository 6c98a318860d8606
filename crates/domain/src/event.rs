//! Event — an immutable record of an observable registry change.
//!
//! The domain mutates silently; one event describes each state-changing
//! operation after the fact. The application layer stamps and publishes
//! them, presentation layers render them as notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::device::{DeviceKind, PowerState};

/// UTC timestamp attached to every event.
pub type Timestamp = DateTime<Utc>;

/// The current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// One observable change in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEvent {
    /// Name of the device the event concerns.
    pub device: String,
    /// What happened.
    pub kind: DeviceEventKind,
    /// When the event was recorded.
    pub occurred_at: Timestamp,
}

impl DeviceEvent {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(device: impl Into<String>, kind: DeviceEventKind) -> Self {
        Self {
            device: device.into(),
            kind,
            occurred_at: now(),
        }
    }
}

impl std::fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeviceEventKind::Added { kind } => {
                write!(f, "{kind} \"{}\" added", self.device)
            }
            DeviceEventKind::PowerChanged { power } => {
                write!(f, "{} is now {power}", self.device)
            }
            DeviceEventKind::SettingAdjusted {
                applied: true,
                summary,
            } => write!(f, "{}: {summary}", self.device),
            DeviceEventKind::SettingAdjusted { applied: false, .. } => {
                write!(f, "{}: setting unchanged (at limit or powered off)", self.device)
            }
        }
    }
}

/// Payload of a [`DeviceEvent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceEventKind {
    /// A device was created and appended to the registry.
    Added { kind: DeviceKind },
    /// A power command was dispatched; `power` is the resulting state.
    PowerChanged { power: PowerState },
    /// An adjust command was dispatched. `applied` is `false` when the
    /// device was powered off or already at a bound; `summary` is the
    /// fresh setting report either way.
    SettingAdjusted { applied: bool, summary: String },
}
