//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homesim.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use homesim_domain::device::DeviceKind;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry settings.
    pub home: HomeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Devices created before the session starts.
    pub devices: Vec<SeedDevice>,
}

/// Registry settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Display label for the device registry.
    pub name: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One device to create at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDevice {
    /// Type tag (`SmartLight` or `SmartThermostat`, any casing).
    #[serde(rename = "type")]
    pub kind: String,
    /// Device name.
    pub name: String,
}

impl Config {
    /// Load configuration from `homesim.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// seed device has an unknown type tag or an empty name.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homesim.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMESIM_HOME_NAME") {
            self.home.name = val;
        }
        if let Ok(val) = std::env::var("HOMESIM_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for seed in &self.devices {
            if seed.kind.parse::<DeviceKind>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "unknown device type in [[devices]]: {}",
                    seed.kind
                )));
            }
            if seed.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "device name in [[devices]] must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: HomeConfig::default(),
            logging: LoggingConfig::default(),
            devices: default_devices(),
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            name: "Smart Home".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homesim_console=info,homesim_app=info".to_string(),
        }
    }
}

/// The three devices a fresh installation starts with.
fn default_devices() -> Vec<SeedDevice> {
    vec![
        SeedDevice {
            kind: "SmartLight".to_string(),
            name: "Living Room Light".to_string(),
        },
        SeedDevice {
            kind: "SmartThermostat".to_string(),
            name: "Main Thermostat".to_string(),
        },
        SeedDevice {
            kind: "SmartLight".to_string(),
            name: "Bedroom Lamp".to_string(),
        },
    ]
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.home.name, "Smart Home");
        assert_eq!(config.logging.filter, "homesim_console=info,homesim_app=info");
        assert_eq!(config.devices.len(), 3);
        assert_eq!(config.devices[0].name, "Living Room Light");
        assert_eq!(config.devices[1].kind, "SmartThermostat");
        assert_eq!(config.devices[2].name, "Bedroom Lamp");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.home.name, "Smart Home");
        assert_eq!(config.devices.len(), 3);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [home]
            name = 'Holiday Cabin'

            [logging]
            filter = 'debug'

            [[devices]]
            type = 'SmartThermostat'
            name = 'Sauna'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.home.name, "Holiday Cabin");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.devices.len(), 1);
        assert_eq!(config.devices[0].kind, "SmartThermostat");
        assert_eq!(config.devices[0].name, "Sauna");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [home]
            name = 'Test Bench'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.home.name, "Test Bench");
        assert_eq!(config.logging.filter, "homesim_console=info,homesim_app=info");
        assert_eq!(config.devices.len(), 3);
    }

    #[test]
    fn should_allow_disabling_the_seed_devices() {
        let toml = "devices = []";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.devices.is_empty());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.home.name, "Smart Home");
    }

    #[test]
    fn should_accept_default_seed_devices() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_accept_seed_tags_in_any_casing() {
        let toml = "
            [[devices]]
            type = 'smartlight'
            name = 'Desk Lamp'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_unknown_seed_device_types() {
        let toml = "
            [[devices]]
            type = 'Toaster'
            name = 'Kitchen Toaster'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "invalid configuration: unknown device type in [[devices]]: Toaster"
        );
    }

    #[test]
    fn should_reject_empty_seed_device_names() {
        let toml = "
            [[devices]]
            type = 'SmartLight'
            name = '  '
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
