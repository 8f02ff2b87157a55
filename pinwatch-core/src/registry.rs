//! Pin registry
//!
//! Holds the validated set of monitored pins together with the handler
//! that receives their events. Built once; there is no API to change it
//! afterwards.

use heapless::FnvIndexSet;
use pinwatch_hal::PinId;

use crate::config::MAX_PINS;
use crate::error::ArgumentError;

/// Immutable watch list plus event handler
pub struct PinRegistry<H> {
    /// Monitored pins in the order they were given
    pins: FnvIndexSet<PinId, MAX_PINS>,
    handler: H,
}

impl<H> PinRegistry<H> {
    /// Validate `pins` and build a registry
    ///
    /// Fails if `pins` is empty, contains a duplicate, or exceeds
    /// [`MAX_PINS`]. The handler is dropped on failure.
    pub fn new(pins: &[PinId], handler: H) -> Result<Self, ArgumentError> {
        if pins.is_empty() {
            return Err(ArgumentError::NoPins);
        }
        if pins.len() > MAX_PINS {
            return Err(ArgumentError::TooManyPins);
        }

        let mut set = FnvIndexSet::new();
        for &pin in pins {
            match set.insert(pin) {
                Ok(true) => {}
                Ok(false) => return Err(ArgumentError::DuplicatePin(pin)),
                Err(_) => return Err(ArgumentError::TooManyPins),
            }
        }

        Ok(Self { pins: set, handler })
    }

    /// Monitored pins, in registration order
    pub fn pins(&self) -> impl Iterator<Item = PinId> + '_ {
        self.pins.iter().copied()
    }

    /// Number of monitored pins
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Always false; a registry holds at least one pin
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Check if `pin` is monitored
    pub fn contains(&self, pin: PinId) -> bool {
        self.pins.contains(&pin)
    }

    /// The registered handler
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access for the dispatch worker
    pub(crate) fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}
