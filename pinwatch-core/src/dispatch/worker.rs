//! Dispatch worker loop

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

use super::handler::EventHandler;
use crate::bridge::EventBridge;
use crate::event::PinEvent;
use crate::registry::PinRegistry;

/// Worker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WorkerState {
    /// Parked on the bridge (initial state)
    WaitingForEvent,
    /// Handler is running
    Dispatching,
}

/// Single consumer of an [`EventBridge`]
///
/// Owns the registry (and therefore the handler) once monitoring starts.
/// Events are handed to the handler one at a time in queue order; a
/// handler call never overlaps another.
pub struct DispatchWorker<'a, M: RawMutex, H, const N: usize> {
    registry: PinRegistry<H>,
    bridge: &'a EventBridge<M, N>,
    state: WorkerState,
    /// Events delivered to the handler
    dispatched: u32,
    /// Handler calls that returned a fault
    faults: u32,
}

impl<'a, M: RawMutex, H: EventHandler, const N: usize> DispatchWorker<'a, M, H, N> {
    pub(crate) fn new(registry: PinRegistry<H>, bridge: &'a EventBridge<M, N>) -> Self {
        Self {
            registry,
            bridge,
            state: WorkerState::WaitingForEvent,
            dispatched: 0,
            faults: 0,
        }
    }

    /// Run forever, dispatching every event as it arrives
    pub async fn run(&mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("Dispatch worker running ({} pins)", self.registry.len());

        let bridge = self.bridge;
        loop {
            let event = bridge.receive().await;
            self.dispatch(event);
        }
    }

    /// Dispatch events until `stop` is signaled
    ///
    /// An event that is already queued is dispatched before a pending stop
    /// is observed. Returns the number of events dispatched by this call.
    pub async fn run_until<S: RawMutex>(&mut self, stop: &Signal<S, ()>) -> usize {
        let bridge = self.bridge;
        let mut count = 0;

        loop {
            match select(bridge.receive(), stop.wait()).await {
                Either::First(event) => {
                    if self.dispatch(event) {
                        count += 1;
                    }
                }
                Either::Second(()) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("Dispatch worker stopped after {} events", count);
                    return count;
                }
            }
        }
    }

    /// Drain everything currently queued without waiting
    ///
    /// Returns the number of events delivered to the handler.
    pub fn dispatch_pending(&mut self) -> usize {
        let bridge = self.bridge;
        let mut count = 0;
        while let Some(event) = bridge.try_receive() {
            if self.dispatch(event) {
                count += 1;
            }
        }
        count
    }

    /// Deliver one event to the handler
    ///
    /// Events for pins outside the registry are skipped and `false` is
    /// returned. A handler fault is counted and logged; it never stops
    /// the worker.
    pub fn dispatch(&mut self, event: PinEvent) -> bool {
        if !self.registry.contains(event.pin) {
            #[cfg(feature = "defmt")]
            defmt::debug!("Ignoring event for unmonitored pin {}", event.pin);
            return false;
        }

        self.state = WorkerState::Dispatching;
        if let Err(_fault) = self.registry.handler_mut().handle(event) {
            self.faults = self.faults.wrapping_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("Handler failed for {}: {}", event.pin, _fault.reason);
        }
        self.dispatched = self.dispatched.wrapping_add(1);
        self.state = WorkerState::WaitingForEvent;

        true
    }

    /// Current state
    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// The registry this worker dispatches for
    pub fn registry(&self) -> &PinRegistry<H> {
        &self.registry
    }

    /// The bridge this worker consumes
    pub fn bridge(&self) -> &'a EventBridge<M, N> {
        self.bridge
    }

    /// Events delivered to the handler so far
    pub fn dispatched(&self) -> u32 {
        self.dispatched
    }

    /// Handler faults so far
    pub fn faults(&self) -> u32 {
        self.faults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::HandlerFault;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use heapless::Vec;
    use pinwatch_hal::{Level, PinId};

    type Bridge = EventBridge<CriticalSectionRawMutex, 8>;

    /// Records events; reports a fault for events on `fail_on`
    struct Recorder {
        seen: Vec<PinEvent, 16>,
        fail_on: Option<PinId>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                seen: Vec::new(),
                fail_on: None,
            }
        }
    }

    impl EventHandler for Recorder {
        fn handle(&mut self, event: PinEvent) -> Result<(), HandlerFault> {
            let _ = self.seen.push(event);
            if self.fail_on == Some(event.pin) {
                return Err(HandlerFault::new("rejected"));
            }
            Ok(())
        }
    }

    fn make_worker<'a>(
        bridge: &'a Bridge,
        pins: &[PinId],
        handler: Recorder,
    ) -> DispatchWorker<'a, CriticalSectionRawMutex, Recorder, 8> {
        DispatchWorker::new(PinRegistry::new(pins, handler).unwrap(), bridge)
    }

    #[test]
    fn test_worker_starts_waiting() {
        let bridge = Bridge::new();
        let worker = make_worker(&bridge, &[PinId(1)], Recorder::new());
        assert_eq!(worker.state(), WorkerState::WaitingForEvent);
        assert_eq!(worker.dispatched(), 0);
    }

    #[test]
    fn test_dispatch_pending_in_order() {
        let bridge = Bridge::new();
        let mut worker = make_worker(&bridge, &[PinId(1), PinId(2)], Recorder::new());

        bridge.push(PinEvent::new(PinId(2), Level::Low));
        bridge.push(PinEvent::new(PinId(1), Level::High));

        assert_eq!(worker.dispatch_pending(), 2);
        assert_eq!(worker.dispatched(), 2);
        assert_eq!(worker.state(), WorkerState::WaitingForEvent);
        assert!(bridge.is_empty());

        let seen = &worker.registry().handler().seen;
        assert_eq!(seen[0], PinEvent::new(PinId(2), Level::Low));
        assert_eq!(seen[1], PinEvent::new(PinId(1), Level::High));
    }

    #[test]
    fn test_handler_fault_is_contained() {
        let bridge = Bridge::new();
        let mut recorder = Recorder::new();
        recorder.fail_on = Some(PinId(1));
        let mut worker = make_worker(&bridge, &[PinId(1), PinId(2)], recorder);

        bridge.push(PinEvent::new(PinId(1), Level::High));
        bridge.push(PinEvent::new(PinId(2), Level::High));
        bridge.push(PinEvent::new(PinId(1), Level::Low));

        assert_eq!(worker.dispatch_pending(), 3);
        assert_eq!(worker.faults(), 2);
        assert_eq!(worker.registry().handler().seen.len(), 3);
        assert_eq!(worker.state(), WorkerState::WaitingForEvent);
    }

    #[test]
    fn test_unmonitored_pin_skipped() {
        let bridge = Bridge::new();
        let mut worker = make_worker(&bridge, &[PinId(1)], Recorder::new());

        assert!(!worker.dispatch(PinEvent::new(PinId(9), Level::High)));
        assert!(worker.dispatch(PinEvent::new(PinId(1), Level::High)));
        assert_eq!(worker.dispatched(), 1);
        assert_eq!(worker.registry().handler().seen.len(), 1);
    }

    #[test]
    fn test_run_until_drains_then_stops() {
        let bridge = Bridge::new();
        let stop: Signal<CriticalSectionRawMutex, ()> = Signal::new();
        let mut worker = make_worker(&bridge, &[PinId(1)], Recorder::new());

        bridge.push(PinEvent::new(PinId(1), Level::High));
        bridge.push(PinEvent::new(PinId(1), Level::Low));
        stop.signal(());

        let count = embassy_futures::block_on(worker.run_until(&stop));
        assert_eq!(count, 2);
        assert_eq!(worker.registry().handler().seen.len(), 2);
    }
}
