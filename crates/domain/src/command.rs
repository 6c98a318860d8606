//! Command — the four-symbol control alphabet understood by the registry.

use crate::error::InvalidCommandError;

/// A parsed control command.
///
/// The registry accepts exactly four symbols: `'1'` turns a device on,
/// `'0'` turns it off, `'+'` raises its setting one step, `'-'` lowers it.
/// Parsing is strict; there are no aliases and no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TurnOn,
    TurnOff,
    Increase,
    Decrease,
}

impl Command {
    /// The symbol this command is written as.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::TurnOn => '1',
            Self::TurnOff => '0',
            Self::Increase => '+',
            Self::Decrease => '-',
        }
    }

    /// Whether dispatching this command requires the
    /// [`Adjustable`](crate::device::Adjustable) capability.
    #[must_use]
    pub fn requires_adjustable(self) -> bool {
        matches!(self, Self::Increase | Self::Decrease)
    }
}

impl TryFrom<char> for Command {
    type Error = InvalidCommandError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '1' => Ok(Self::TurnOn),
            '0' => Ok(Self::TurnOff),
            '+' => Ok(Self::Increase),
            '-' => Ok(Self::Decrease),
            _ => Err(InvalidCommandError { symbol }),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
