//! Pin change events

use pinwatch_hal::{Level, PinId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single observed edge
///
/// Produced once in interrupt context and consumed exactly once by the
/// dispatch worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinEvent {
    /// Pin that changed
    pub pin: PinId,
    /// Level read right after the edge
    pub level: Level,
}

impl PinEvent {
    /// Create an event
    pub const fn new(pin: PinId, level: Level) -> Self {
        Self { pin, level }
    }
}
