//! # homesim-console — interactive console for the device simulation
//!
//! Composition root that wires the home service to a terminal menu.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialise the tracing subscriber
//! - Construct the event bus and the home service, seed the configured
//!   devices
//! - Run the interactive session: list devices, read a selection and a
//!   command, dispatch through the service, render notifications
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring and presentation layer — no domain logic belongs here.
//! Devices are reached exclusively through the service's public operations.

mod config;

use std::io::{self, BufRead, Write};

use homesim_app::event_bus::InProcessEventBus;
use homesim_app::services::home_service::{DeviceSnapshot, HomeService};
use homesim_domain::event::DeviceEvent;
use homesim_domain::home::SmartHome;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration & logging
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    // Event bus
    let event_bus = InProcessEventBus::new(256);

    // Service
    let mut service = HomeService::new(
        SmartHome::new(config.home.name.clone()),
        event_bus.clone(),
    );

    // Seed devices (validated at config load time)
    for seed in &config.devices {
        service.create_device(&seed.kind, &seed.name)?;
    }
    tracing::info!(count = service.device_count(), "registry seeded");

    // Interactive session. Subscribing after seeding keeps the seeding
    // notifications out of the session feed.
    let mut notifications = event_bus.subscribe();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &mut service,
        &mut notifications,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    Ok(())
}

/// Initialise the global tracing subscriber from the configured filter.
fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}

/// Drive the interactive session until the user quits or input ends.
fn run<R, W>(
    service: &mut HomeService<InProcessEventBus>,
    notifications: &mut broadcast::Receiver<DeviceEvent>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        render_menu(service, output)?;
        let Some(selection) = prompt(input, output)? else {
            break;
        };
        if selection.eq_ignore_ascii_case("q") {
            break;
        }
        if selection.eq_ignore_ascii_case("a") {
            add_device(service, input, output)?;
        } else if let Some(snapshot) = select_device(service, &selection) {
            control_selected(service, &snapshot, input, output)?;
        } else {
            writeln!(output, "No device matches \"{selection}\".")?;
        }
        render_notifications(notifications, output)?;
    }
    Ok(())
}

/// List every device with its selection index.
fn render_menu<W: Write>(
    service: &HomeService<InProcessEventBus>,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "{}: {} device(s)",
        service.home_name(),
        service.device_count()
    )?;
    for (index, snapshot) in service.list_devices().iter().enumerate() {
        writeln!(output, "  [{index}] {}", snapshot.summary)?;
    }
    writeln!(output, "Select a device by number, 'a' to add one, or 'q' to quit.")?;
    Ok(())
}

/// Print the prompt marker and read one trimmed line.
///
/// Returns `None` when input is exhausted.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    write!(output, "> ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Resolve a menu selection to the device snapshot at that index.
fn select_device(
    service: &HomeService<InProcessEventBus>,
    selection: &str,
) -> Option<DeviceSnapshot> {
    let index: usize = selection.parse().ok()?;
    service.list_devices().into_iter().nth(index)
}

/// Show the current setting of the selected device, then read and
/// dispatch one command.
fn control_selected<R, W>(
    service: &mut HomeService<InProcessEventBus>,
    snapshot: &DeviceSnapshot,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if let Some(setting) = &snapshot.setting_summary {
        writeln!(output, "{}: {setting}", snapshot.name)?;
    }
    writeln!(output, "Commands: '1' on, '0' off, '+' step up, '-' step down.")?;
    let Some(line) = prompt(input, output)? else {
        return Ok(());
    };
    let mut symbols = line.chars();
    let (Some(symbol), None) = (symbols.next(), symbols.next()) else {
        writeln!(output, "Enter a single command character.")?;
        return Ok(());
    };
    if let Err(err) = service.control_device(&snapshot.name, symbol) {
        writeln!(output, "{err}")?;
    }
    Ok(())
}

/// Read a type tag and a name, then create the device.
fn add_device<R, W>(
    service: &mut HomeService<InProcessEventBus>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Device type (SmartLight or SmartThermostat):")?;
    let Some(type_tag) = prompt(input, output)? else {
        return Ok(());
    };
    writeln!(output, "Device name:")?;
    let Some(name) = prompt(input, output)? else {
        return Ok(());
    };
    if let Err(err) = service.create_device(&type_tag, &name) {
        writeln!(output, "{err}")?;
    }
    Ok(())
}

/// Print every notification that arrived since the last pass.
fn render_notifications<W: Write>(
    notifications: &mut broadcast::Receiver<DeviceEvent>,
    output: &mut W,
) -> io::Result<()> {
    loop {
        match notifications.try_recv() {
            Ok(event) => writeln!(output, "{event}")?,
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                writeln!(output, "({skipped} notifications dropped)")?;
            }
            Err(_) => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a scripted session against a freshly seeded service and return
    /// everything it printed.
    fn session(script: &str) -> String {
        let event_bus = InProcessEventBus::new(256);
        let mut service = HomeService::new(SmartHome::new("Test Home"), event_bus.clone());
        for (type_tag, name) in [
            ("SmartLight", "Living Room Light"),
            ("SmartThermostat", "Main Thermostat"),
            ("SmartLight", "Bedroom Lamp"),
        ] {
            service.create_device(type_tag, name).unwrap();
        }
        let mut notifications = event_bus.subscribe();
        let mut input = Cursor::new(script);
        let mut output = Vec::new();
        run(&mut service, &mut notifications, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn should_render_the_menu_and_quit() {
        let output = session("q\n");
        assert!(output.contains("Test Home: 3 device(s)"));
        assert!(output.contains("[0] SmartLight \"Living Room Light\" is off with brightness 5"));
        assert!(output.contains("[1] SmartThermostat \"Main Thermostat\""));
        assert!(output.contains("[2] SmartLight \"Bedroom Lamp\""));
    }

    #[test]
    fn should_end_when_input_is_exhausted() {
        let output = session("");
        assert!(output.contains("Test Home: 3 device(s)"));
    }

    #[test]
    fn should_turn_a_device_on_and_render_the_notification() {
        let output = session("0\n1\nq\n");
        assert!(output.contains("Living Room Light is now on"));
        assert!(output.contains("[0] SmartLight \"Living Room Light\" is on with brightness 5"));
    }

    #[test]
    fn should_show_the_setting_before_asking_for_a_command() {
        let output = session("0\nq\n");
        assert!(output.contains("Living Room Light: brightness 5 (range 0-10)"));
    }

    #[test]
    fn should_surface_invalid_command_errors_verbatim() {
        let output = session("0\nx\nq\n");
        assert!(output.contains("invalid control command: x"));
    }

    #[test]
    fn should_flag_refused_adjustments() {
        // Thermostat is powered off, so '+' is dispatched but not applied.
        let output = session("1\n+\nq\n");
        assert!(output.contains("Main Thermostat: setting unchanged (at limit or powered off)"));
    }

    #[test]
    fn should_add_a_device_through_the_menu() {
        let output = session("a\nsmartthermostat\nAttic Thermostat\nq\n");
        assert!(output.contains("SmartThermostat \"Attic Thermostat\" added"));
        assert!(output.contains("Test Home: 4 device(s)"));
    }

    #[test]
    fn should_surface_creation_errors_verbatim() {
        let output = session("a\nToaster\nKitchen Toaster\nq\n");
        assert!(output.contains("unknown device type: Toaster"));
        assert!(!output.contains("4 device(s)"));
    }

    #[test]
    fn should_reject_empty_device_names() {
        let output = session("a\nSmartLight\n\nq\n");
        assert!(output.contains("device name must not be empty"));
    }

    #[test]
    fn should_reject_out_of_range_selections() {
        let output = session("9\nq\n");
        assert!(output.contains("No device matches \"9\"."));
    }

    #[test]
    fn should_reject_multi_character_commands() {
        let output = session("0\n++\nq\n");
        assert!(output.contains("Enter a single command character."));
        // The light was never touched.
        assert!(!output.contains("brightness 6"));
    }
}
