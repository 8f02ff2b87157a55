//! GPIO input abstractions
//!
//! Level sampling and the configuration used for edge-monitored pins.
//! Monitored inputs always interrupt on both edges, so only the pull is
//! configurable.

use crate::pin::{Level, PinId};

/// Reads the level of any pin by identifier
///
/// Must be a constant-time register read: it is called from interrupt
/// context.
pub trait LevelReader {
    /// Read the current level of `pin`
    fn read_level(&self, pin: PinId) -> Level;
}

/// Internal pull resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Floating input
    None,
    /// Pull-up enabled, pull-down disabled
    Up,
    /// Pull-down enabled, pull-up disabled
    Down,
}

/// Input pin configuration
///
/// The pin interrupts on every rising and falling edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Pull resistor
    pub pull: Pull,
}

impl InputConfig {
    /// Input with pull-up, interrupting on every transition
    ///
    /// This is the configuration applied to every monitored pin.
    pub const EDGE_INPUT: Self = Self { pull: Pull::Up };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLevels([Level; 4]);

    impl LevelReader for FixedLevels {
        fn read_level(&self, pin: PinId) -> Level {
            self.0[pin.number() as usize]
        }
    }

    #[test]
    fn test_level_reader_by_pin() {
        let reader = FixedLevels([Level::Low, Level::High, Level::High, Level::Low]);
        assert_eq!(reader.read_level(PinId(1)), Level::High);
        assert_eq!(reader.read_level(PinId(3)), Level::Low);
    }

    #[test]
    fn test_edge_input_config() {
        assert_eq!(InputConfig::EDGE_INPUT.pull, Pull::Up);
    }
}
