//! Monitor lifecycle
//!
//! [`PinMonitor`] is the explicit context object for one monitoring
//! session. It borrows a caller-owned [`EventBridge`], configures the
//! hardware on [`initialize`](PinMonitor::initialize) and hands out the
//! single [`DispatchWorker`] on [`start`](PinMonitor::start).
//!
//! ```text
//! Uninitialized ──initialize──▶ Initialized ──start──▶ Started
//!       ▲   │ (invalid args)        │  ▲
//!       └───┘                       └──┘ initialize (replaces registry,
//!                                             unbinds dropped pins)
//! ```

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use pinwatch_hal::{EdgeInterrupts, InputConfig, PinId};

use crate::bridge::{EdgeProducer, EventBridge};
use crate::config::EVENT_QUEUE_CAPACITY;
use crate::dispatch::{DispatchWorker, EventHandler};
use crate::error::{ArgumentError, MonitorError, StateError};
use crate::registry::PinRegistry;

/// Monitor over the default critical-section bridge
pub type DefaultMonitor<'a, H> = PinMonitor<'a, CriticalSectionRawMutex, H, EVENT_QUEUE_CAPACITY>;

/// Monitoring context: registry, bridge and lifecycle guards
pub struct PinMonitor<'a, M: RawMutex, H, const N: usize> {
    bridge: &'a EventBridge<M, N>,
    registry: Option<PinRegistry<H>>,
    /// Interrupt service enabled on the hardware
    service_installed: bool,
    /// Worker handed out
    started: bool,
}

impl<'a, M: RawMutex, H: EventHandler, const N: usize> PinMonitor<'a, M, H, N> {
    /// Create an uninitialized monitor feeding `bridge`
    pub const fn new(bridge: &'a EventBridge<M, N>) -> Self {
        Self {
            bridge,
            registry: None,
            service_installed: false,
            started: false,
        }
    }

    /// Validate `pins`, configure them and bind their interrupts
    ///
    /// Every pin is set up as an input with pull-up, interrupting on any
    /// edge, and gets its own [`EdgeProducer`]. The interrupt service is
    /// installed on the first successful call only.
    ///
    /// On error nothing is changed, neither here nor on the hardware.
    /// Calling again before [`start`](Self::start) replaces the registry
    /// and unbinds pins the new list no longer contains.
    pub fn initialize<Hw>(
        &mut self,
        hw: &mut Hw,
        pins: &[PinId],
        handler: H,
    ) -> Result<(), MonitorError>
    where
        Hw: EdgeInterrupts<EdgeProducer<'a, M, N>>,
    {
        if self.started {
            return Err(StateError::AlreadyStarted.into());
        }

        let registry = PinRegistry::new(pins, handler)?;
        if let Some(pin) = registry.pins().find(|&pin| !hw.is_valid_pin(pin)) {
            return Err(ArgumentError::UnsupportedPin(pin).into());
        }

        if !self.service_installed {
            hw.install_interrupt_service();
            self.service_installed = true;
        }

        // Pins dropped by a replaced registry must stop feeding the bridge
        if let Some(previous) = &self.registry {
            for pin in previous.pins().filter(|&pin| !registry.contains(pin)) {
                hw.unbind_interrupt(pin);
            }
        }

        for pin in registry.pins() {
            hw.configure_input(pin, InputConfig::EDGE_INPUT);
            hw.bind_interrupt(EdgeProducer::new(pin, self.bridge));
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Pin monitor initialized with {} pins", registry.len());

        self.registry = Some(registry);
        Ok(())
    }

    /// Hand out the dispatch worker
    ///
    /// The registry moves into the worker; spawn it on the executor (or
    /// drive [`DispatchWorker::dispatch_pending`] from an existing loop).
    /// Fails before a successful `initialize`, and on every call after the
    /// first success.
    pub fn start(&mut self) -> Result<DispatchWorker<'a, M, H, N>, MonitorError> {
        if self.started {
            return Err(StateError::AlreadyStarted.into());
        }
        let registry = self.registry.take().ok_or(StateError::NotInitialized)?;
        self.started = true;

        #[cfg(feature = "defmt")]
        defmt::info!("Pin monitoring started");

        Ok(DispatchWorker::new(registry, self.bridge))
    }

    /// Check if a registry is waiting to be started
    pub fn is_initialized(&self) -> bool {
        self.registry.is_some()
    }

    /// Check if the worker has been handed out
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Registry set by the last successful `initialize`, until `start`
    pub fn registry(&self) -> Option<&PinRegistry<H>> {
        self.registry.as_ref()
    }

    /// The bridge events are pushed into
    pub fn bridge(&self) -> &'a EventBridge<M, N> {
        self.bridge
    }
}
