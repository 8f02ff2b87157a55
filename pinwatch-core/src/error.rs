//! Monitor errors

use pinwatch_hal::PinId;

/// Rejected `initialize` arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// Pin list was empty
    NoPins,
    /// Pin listed more than once
    DuplicatePin(PinId),
    /// More pins than [`MAX_PINS`](crate::MAX_PINS)
    TooManyPins,
    /// Hardware does not have this pin
    UnsupportedPin(PinId),
}

/// Operation not allowed in the current lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateError {
    /// `start` called before a successful `initialize`
    NotInitialized,
    /// Dispatch worker already handed out
    AlreadyStarted,
}

/// Errors returned by [`PinMonitor`](crate::PinMonitor)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError {
    /// Caller passed invalid arguments; nothing was changed
    InvalidArgument(ArgumentError),
    /// Monitoring is not (or no longer) in a state that allows the call
    InvalidState(StateError),
}

impl From<ArgumentError> for MonitorError {
    fn from(err: ArgumentError) -> Self {
        MonitorError::InvalidArgument(err)
    }
}

impl From<StateError> for MonitorError {
    fn from(err: StateError) -> Self {
        MonitorError::InvalidState(err)
    }
}
