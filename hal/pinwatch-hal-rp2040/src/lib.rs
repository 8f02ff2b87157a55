//! RP2040-specific HAL for pin monitoring
//!
//! Implements the `pinwatch-hal` traits on top of embassy-rp:
//!
//! - Pin bank for taking GPIOs by number
//! - Edge interrupt wiring ([`Rp2040Edges`]) and per-pin relays
//!
//! embassy-rp owns the `IO_IRQ_BANK0` vector, so each bound pin gets an
//! [`EdgeRelay`] future that wakes on its edge. Spawn the relays on an
//! `InterruptExecutor` so bindings run at interrupt priority.

#![no_std]

pub mod edges;
pub mod pins;

pub use edges::{EdgeRelay, Rp2040Edges};
pub use pins::{PinBank, PinError, GPIO_COUNT};
