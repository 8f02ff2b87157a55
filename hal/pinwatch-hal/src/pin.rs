//! Pin identity and logic level

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hardware pin identifier
///
/// An opaque small integer. Its valid range is defined by the chip; see
/// [`EdgeInterrupts::is_valid_pin`](crate::EdgeInterrupts::is_valid_pin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct PinId(pub u8);

impl PinId {
    /// Create a pin identifier
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Raw pin number
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(number: u8) -> Self {
        Self(number)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gpio{}", self.0)
    }
}

/// Error parsing a pin name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsePinError;

impl fmt::Display for ParsePinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a pin name like \"gpio14\"")
    }
}

/// Parse a pin name from config
///
/// Accepts `"gpio14"` as well as the bare number `"14"`. Range checks are
/// left to the chip.
impl FromStr for PinId {
    type Err = ParsePinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix("gpio").unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePinError);
        }
        digits.parse().map(PinId).map_err(|_| ParsePinError)
    }
}

/// Digital logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if the level is high
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if the level is low
    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }

    /// The opposite level
    pub const fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}
