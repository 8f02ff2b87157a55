//! Inter-task communication
//!
//! The edge relays (interrupt priority) and the dispatch worker (thread
//! mode) only share the event bridge.

use pinwatch_core::{DefaultBridge, EventBridge};

/// Pin events from the edge relays to the dispatch worker
pub static PIN_EVENTS: DefaultBridge = EventBridge::new();
