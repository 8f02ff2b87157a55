//! Fake hardware collaborator shared by the integration tests

#![allow(dead_code)]

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use pinwatch_core::{EdgeProducer, EVENT_QUEUE_CAPACITY};
use pinwatch_hal::{EdgeInterrupts, InputConfig, Level, LevelReader, PinId, PinInterrupt};

pub type Producer<'a, const N: usize> = EdgeProducer<'a, CriticalSectionRawMutex, N>;

/// Simulated GPIO bank
///
/// Pins idle high (pull-up). `trigger` sets a level and runs the bound
/// interrupt the way a chip ISR would.
pub struct FakeHardware<'a, const N: usize = EVENT_QUEUE_CAPACITY> {
    pin_count: u8,
    levels: [Level; 64],
    configured: Vec<(PinId, InputConfig)>,
    service_installs: usize,
    bindings: Vec<Producer<'a, N>>,
}

impl<'a, const N: usize> FakeHardware<'a, N> {
    pub fn new(pin_count: u8) -> Self {
        Self {
            pin_count,
            levels: [Level::High; 64],
            configured: Vec::new(),
            service_installs: 0,
            bindings: Vec::new(),
        }
    }

    pub fn set_level(&mut self, pin: PinId, level: Level) {
        self.levels[pin.number() as usize] = level;
    }

    /// Run the interrupt bound to `pin`; false if nothing is bound
    pub fn fire(&self, pin: PinId) -> bool {
        match self.binding(pin) {
            Some(binding) => {
                binding.on_interrupt(self);
                true
            }
            None => false,
        }
    }

    /// Drive `pin` to `level` and fire its interrupt
    pub fn trigger(&mut self, pin: PinId, level: Level) -> bool {
        self.set_level(pin, level);
        self.fire(pin)
    }

    pub fn binding(&self, pin: PinId) -> Option<Producer<'a, N>> {
        self.bindings.iter().copied().find(|b| b.pin() == pin)
    }

    pub fn configured(&self) -> &[(PinId, InputConfig)] {
        &self.configured
    }

    pub fn service_installs(&self) -> usize {
        self.service_installs
    }
}

impl<const N: usize> LevelReader for FakeHardware<'_, N> {
    fn read_level(&self, pin: PinId) -> Level {
        self.levels[pin.number() as usize]
    }
}

impl<'a, const N: usize> EdgeInterrupts<Producer<'a, N>> for FakeHardware<'a, N> {
    fn configure_input(&mut self, pin: PinId, config: InputConfig) {
        self.configured.push((pin, config));
    }

    fn install_interrupt_service(&mut self) {
        self.service_installs += 1;
    }

    fn bind_interrupt(&mut self, binding: Producer<'a, N>) {
        self.bindings.retain(|b| b.pin() != binding.pin());
        self.bindings.push(binding);
    }

    fn unbind_interrupt(&mut self, pin: PinId) {
        self.bindings.retain(|b| b.pin() != pin);
    }

    fn is_valid_pin(&self, pin: PinId) -> bool {
        pin.number() < self.pin_count
    }
}
