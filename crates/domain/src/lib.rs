//! # homesim-domain
//!
//! Pure domain model for the homesim household-device simulation.
//!
//! ## Responsibilities
//! - Define the **capability traits** every device exposes
//!   ([`SmartDevice`](device::SmartDevice)) and the bounded-setting
//!   capability controllable devices add ([`Adjustable`](device::Adjustable))
//! - Define the **concrete device kinds** ([`SmartLight`](device::SmartLight),
//!   [`SmartThermostat`](device::SmartThermostat)) with their clamped
//!   setting ranges
//! - Define the **registry** ([`SmartHome`](home::SmartHome)) that creates,
//!   owns, looks up, and dispatches commands to devices
//! - Define the **command alphabet** ([`Command`](command::Command)) and
//!   **domain events** ([`DeviceEvent`](event::DeviceEvent))
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the console, or IO crates.
//! State changes are observable as domain events; publishing them is the
//! `app` crate's concern.

pub mod command;
pub mod device;
pub mod error;
pub mod event;
pub mod home;
