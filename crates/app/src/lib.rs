//! # homesim-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **outbound port** notification sinks implement:
//!   - `EventPublisher` — receives one domain event per state change
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate the domain registry through the use-case struct:
//!   - `HomeService` — create devices, dispatch commands, list snapshots
//! - Attach structured logging to every use-case; the domain itself stays
//!   silent
//!
//! ## Dependency rule
//! Depends on `homesim-domain` only (plus `tokio::sync` for channels).
//! Never imports presentation crates. Presentation layers depend on *this*
//! crate, not the reverse, and reach devices exclusively through
//! `HomeService`.

pub mod event_bus;
pub mod ports;
pub mod services;
