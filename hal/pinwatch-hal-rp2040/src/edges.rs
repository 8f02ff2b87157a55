//! Edge interrupt wiring on RP2040
//!
//! embassy-rp services `IO_IRQ_BANK0` itself and wakes whichever future is
//! waiting on the pin. [`Rp2040Edges`] turns each configured pin into an
//! [`EdgeRelay`] that awaits the edge and calls the binding straight from
//! the waker's executor. Run relays on an `InterruptExecutor` so bindings
//! execute at interrupt priority and never wait on thread-mode work.
//!
//! ```text
//! IO_IRQ_BANK0 ──▶ embassy-rp waker ──▶ EdgeRelay (SWI executor)
//!                                          │
//!                                          ▼
//!                               binding.on_interrupt(level)
//! ```

use embassy_rp::gpio::{Input, Pull as RpPull};
use heapless::Vec;
use pinwatch_hal::{EdgeInterrupts, InputConfig, Level, LevelReader, PinId, PinInterrupt, Pull};

use crate::pins::{PinBank, GPIO_COUNT};

/// Samples the one input a relay owns
struct InputLevel<'a>(&'a Input<'static>);

impl LevelReader for InputLevel<'_> {
    fn read_level(&self, _pin: PinId) -> Level {
        Level::from(self.0.is_high())
    }
}

/// A configured input paired with its interrupt binding
pub struct EdgeRelay<I> {
    input: Input<'static>,
    binding: I,
}

impl<I: PinInterrupt> EdgeRelay<I> {
    /// The pin this relay watches
    pub fn pin(&self) -> PinId {
        self.binding.pin()
    }

    /// Forward every edge to the binding
    pub async fn run(mut self) -> ! {
        loop {
            self.input.wait_for_any_edge().await;
            self.binding.on_interrupt(&InputLevel(&self.input));
        }
    }
}

/// RP2040 implementation of [`EdgeInterrupts`]
pub struct Rp2040Edges<I> {
    bank: PinBank,
    /// Inputs configured but not (or no longer) bound
    inputs: [Option<Input<'static>>; GPIO_COUNT],
    relays: Vec<EdgeRelay<I>, GPIO_COUNT>,
}

impl<I: PinInterrupt> Rp2040Edges<I> {
    /// Create from a pin bank
    pub fn new(bank: PinBank) -> Self {
        Self {
            bank,
            inputs: core::array::from_fn(|_| None),
            relays: Vec::new(),
        }
    }

    /// Hand over the relays bound so far, ready to spawn
    ///
    /// Pins whose relays were taken can no longer be rebound or unbound.
    pub fn take_relays(&mut self) -> Vec<EdgeRelay<I>, GPIO_COUNT> {
        core::mem::take(&mut self.relays)
    }

    fn has_relay(&self, pin: PinId) -> bool {
        self.relays.iter().any(|relay| relay.pin() == pin)
    }
}

fn to_rp_pull(pull: Pull) -> RpPull {
    match pull {
        Pull::None => RpPull::None,
        Pull::Up => RpPull::Up,
        Pull::Down => RpPull::Down,
    }
}

impl<I: PinInterrupt> EdgeInterrupts<I> for Rp2040Edges<I> {
    fn configure_input(&mut self, pin: PinId, config: InputConfig) {
        let index = pin.number() as usize;

        // Already configured by an earlier initialize
        if self.has_relay(pin) || matches!(self.inputs.get(index), Some(Some(_))) {
            return;
        }

        match self.bank.take(pin) {
            Ok(gpio) => {
                self.inputs[index] = Some(Input::new(gpio, to_rp_pull(config.pull)));
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{}: cannot configure input: {}", pin, _e);
            }
        }
    }

    fn install_interrupt_service(&mut self) {
        // embassy_rp::init already unmasks IO_IRQ_BANK0
        #[cfg(feature = "defmt")]
        defmt::info!("GPIO edge interrupt service ready");
    }

    fn bind_interrupt(&mut self, binding: I) {
        let pin = binding.pin();

        if let Some(relay) = self.relays.iter_mut().find(|relay| relay.pin() == pin) {
            relay.binding = binding;
            return;
        }

        let Some(input) = self
            .inputs
            .get_mut(pin.number() as usize)
            .and_then(Option::take)
        else {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}: bind without a configured input", pin);
            return;
        };

        if self.relays.push(EdgeRelay { input, binding }).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}: relay table full", pin);
        }
    }

    fn unbind_interrupt(&mut self, pin: PinId) {
        let Some(pos) = self.relays.iter().position(|relay| relay.pin() == pin) else {
            return;
        };

        // Keep the input configured so a later bind can reuse it
        let relay = self.relays.swap_remove(pos);
        self.inputs[pin.number() as usize] = Some(relay.input);

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: interrupt unbound", pin);
    }

    fn is_valid_pin(&self, pin: PinId) -> bool {
        PinBank::is_valid(pin)
    }
}
