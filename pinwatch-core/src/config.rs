//! Compile-time configuration

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::bridge::EventBridge;

/// Default event queue capacity
///
/// Slack for short bursts of edges while the worker is busy. Overflowing
/// events are dropped and counted, never blocked on.
pub const EVENT_QUEUE_CAPACITY: usize = 10;

/// Maximum number of monitored pins (must be a power of two)
pub const MAX_PINS: usize = 32;

const _: () = assert!(MAX_PINS.is_power_of_two(), "MAX_PINS must be a power of 2");

/// Bridge guarded by a critical section, safe to share with interrupt handlers
pub type DefaultBridge = EventBridge<CriticalSectionRawMutex, EVENT_QUEUE_CAPACITY>;
