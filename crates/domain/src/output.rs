//! Output pin identifiers and the binary level driven onto them.

use std::fmt;

use serde::Deserialize;

/// Identifier of a digital output pin (e.g. `GPIO2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PinId(u8);

impl PinId {
    /// Wrap a raw pin number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Raw pin number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// Binary state of the controlled output.
///
/// This is the live mirror of the last recognised command. It starts
/// [`Off`](Self::Off) and is only changed by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputLevel {
    On,
    #[default]
    Off,
}

impl OutputLevel {
    /// Electrical level as written to the pin (`1` for on, `0` for off).
    #[must_use]
    pub const fn as_bit(self) -> u8 {
        match self {
            Self::On => 1,
            Self::Off => 0,
        }
    }
}

impl fmt::Display for OutputLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}
