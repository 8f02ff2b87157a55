//! Edge interrupt wiring
//!
//! The hardware layer owns the actual interrupt vector. For every bound
//! pin it keeps one [`PinInterrupt`] and calls
//! [`PinInterrupt::on_interrupt`] when that pin's edge fires, passing
//! itself as the level reader.
//!
//! ```text
//! edge ──▶ chip ISR ──▶ binding.on_interrupt(reader) ──▶ (queue)
//! ```

use crate::gpio::{InputConfig, LevelReader};
use crate::pin::PinId;

/// Interrupt binding for a single pin
///
/// Each binding carries its own pin identity, so the chip ISR never has to
/// recover it from an untyped context value.
pub trait PinInterrupt {
    /// The pin this binding was created for
    fn pin(&self) -> PinId;

    /// Called from interrupt context when the pin's edge fires
    ///
    /// Implementations must not block, allocate or call into user code.
    fn on_interrupt<R: LevelReader + ?Sized>(&self, reader: &R);
}

/// Pin configuration and interrupt registration
///
/// Generic over the binding type so chip code can store bindings without
/// depending on whoever creates them.
pub trait EdgeInterrupts<I: PinInterrupt> {
    /// Configure `pin` as an input with the given pull, interrupting on any edge
    fn configure_input(&mut self, pin: PinId, config: InputConfig);

    /// Enable the shared GPIO interrupt service
    ///
    /// Callers guarantee this runs once before the first binding.
    fn install_interrupt_service(&mut self);

    /// Attach `binding` to its pin's interrupt, replacing any previous one
    fn bind_interrupt(&mut self, binding: I);

    /// Detach whatever binding `pin` has; its edges stop producing events
    fn unbind_interrupt(&mut self, pin: PinId);

    /// Whether the chip has this pin
    fn is_valid_pin(&self, _pin: PinId) -> bool {
        true
    }
}
