//! Board-agnostic pin monitoring core
//!
//! Moves pin edge events out of interrupt context and into a task where
//! user code may block:
//!
//! - Pin registry (validated, immutable watch list plus handler)
//! - Event bridge (bounded interrupt-safe queue, drops on overflow)
//! - Edge producer (per-pin interrupt binding feeding the bridge)
//! - Dispatch worker (single consumer invoking the handler)
//! - [`PinMonitor`] context tying the lifecycle together
//!
//! # Example
//!
//! ```ignore
//! static BRIDGE: DefaultBridge = DefaultBridge::new();
//!
//! let mut monitor = PinMonitor::new(&BRIDGE);
//! monitor.initialize(&mut hw, &[PinId(14), PinId(15)], |pin, level| {
//!     info!("{} changed to {}", pin, level);
//! })?;
//! let worker = monitor.start()?;
//! spawner.spawn(dispatch_task(worker))?;
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod monitor;
pub mod registry;

pub use bridge::{EdgeProducer, EventBridge};
pub use config::{DefaultBridge, EVENT_QUEUE_CAPACITY, MAX_PINS};
pub use dispatch::{DispatchWorker, EventHandler, HandlerFault, WorkerState};
pub use error::{ArgumentError, MonitorError, StateError};
pub use event::PinEvent;
pub use monitor::{DefaultMonitor, PinMonitor};
pub use registry::PinRegistry;

pub use pinwatch_hal::{Level, PinId};
