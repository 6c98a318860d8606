//! Common error types used across the workspace.
//!
//! Every way the registry contract can be violated is a typed caller error
//! with its own source struct, converted into [`HomeError`] via `#[from]`.
//! The "adjustment had no effect" outcome of
//! [`Adjustable`](crate::device::Adjustable) is a normal boolean result and
//! deliberately has no variant here.

/// Base error enum for the homesim domain.
#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    /// Creation was requested with an unrecognised type tag.
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),

    /// A command addressed a name no device carries.
    #[error(transparent)]
    NotFound(#[from] DeviceNotFoundError),

    /// An adjust command addressed a device without the bounded-setting
    /// capability.
    #[error(transparent)]
    NotControllable(#[from] NotControllableError),

    /// A command symbol outside the `{'0', '1', '+', '-'}` alphabet.
    #[error(transparent)]
    InvalidCommand(#[from] InvalidCommandError),

    /// A device field failed validation at creation time.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// No device kind matches the requested type tag.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown device type: {type_tag}")]
pub struct UnknownTypeError {
    /// The tag that matched no known kind (original casing preserved).
    pub type_tag: String,
}

/// No device in the registry carries the requested name.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("device not found: {name}")]
pub struct DeviceNotFoundError {
    /// The name that was looked up.
    pub name: String,
}

/// The addressed device does not expose the bounded-setting capability.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("device is not controllable: {name}")]
pub struct NotControllableError {
    /// Name of the addressed device.
    pub name: String,
}

/// The command symbol is not part of the control alphabet.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid control command: {symbol}")]
pub struct InvalidCommandError {
    /// The rejected symbol.
    pub symbol: char,
}

/// A creation-time field constraint was violated.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Device names must contain at least one non-whitespace character.
    #[error("device name must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_the_offending_input_in_messages() {
        let err = UnknownTypeError {
            type_tag: "Toaster".to_string(),
        };
        assert_eq!(err.to_string(), "unknown device type: Toaster");

        let err = DeviceNotFoundError {
            name: "Garage Light".to_string(),
        };
        assert_eq!(err.to_string(), "device not found: Garage Light");

        let err = InvalidCommandError { symbol: 'x' };
        assert_eq!(err.to_string(), "invalid control command: x");
    }

    #[test]
    fn should_convert_source_errors_into_home_error_variants() {
        let err = HomeError::from(InvalidCommandError { symbol: '?' });
        assert!(matches!(err, HomeError::InvalidCommand(_)));

        let err = HomeError::from(ValidationError::EmptyName);
        assert!(matches!(err, HomeError::Validation(_)));
    }

    #[test]
    fn should_delegate_display_to_the_source_error() {
        let err = HomeError::from(NotControllableError {
            name: "Main Thermostat".to_string(),
        });
        assert_eq!(err.to_string(), "device is not controllable: Main Thermostat");
    }
}
