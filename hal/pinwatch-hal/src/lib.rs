//! Pinwatch Hardware Abstraction Layer
//!
//! This crate defines the hardware collaborator that the monitoring core
//! talks to. Chip-specific code implements these traits; the core only
//! ever sees pin identifiers, levels and interrupt bindings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (pinwatch-firmware, etc.)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinwatch-core (registry/bridge/worker) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinwatch-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::LevelReader`] - Level sampling
//! - [`interrupt::PinInterrupt`] - Per-pin interrupt binding
//! - [`interrupt::EdgeInterrupts`] - Pin configuration and interrupt wiring

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod interrupt;
pub mod pin;

// Re-export key types at crate root for convenience
pub use gpio::{InputConfig, LevelReader, Pull};
pub use interrupt::{EdgeInterrupts, PinInterrupt};
pub use pin::{Level, ParsePinError, PinId};
