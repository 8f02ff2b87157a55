//! Watched pins
//!
//! Generated by build.rs from pinwatch.toml, which is validated there.

use pinwatch_core::PinId;

include!(concat!(env!("OUT_DIR"), "/watched_pins.rs"));
