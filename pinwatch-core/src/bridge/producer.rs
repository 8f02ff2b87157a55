//! Interrupt-side event producer

use embassy_sync::blocking_mutex::raw::RawMutex;
use pinwatch_hal::{LevelReader, PinId, PinInterrupt};

use super::queue::EventBridge;
use crate::event::PinEvent;

/// Per-pin interrupt binding that feeds an [`EventBridge`]
///
/// One producer is bound for every monitored pin. It closes over its own
/// [`PinId`], so the hardware layer can call it without any context
/// lookup. Work done per interrupt is one level read and one queue push.
pub struct EdgeProducer<'a, M: RawMutex, const N: usize> {
    pin: PinId,
    bridge: &'a EventBridge<M, N>,
}

impl<'a, M: RawMutex, const N: usize> EdgeProducer<'a, M, N> {
    /// Create a producer for `pin`
    pub const fn new(pin: PinId, bridge: &'a EventBridge<M, N>) -> Self {
        Self { pin, bridge }
    }

    /// Handle one edge: sample the level and queue the event
    ///
    /// Returns `false` if the bridge was full and the event was dropped.
    #[inline]
    pub fn on_edge<R: LevelReader + ?Sized>(&self, reader: &R) -> bool {
        let level = reader.read_level(self.pin);
        self.bridge.push(PinEvent::new(self.pin, level))
    }
}

impl<M: RawMutex, const N: usize> Clone for EdgeProducer<'_, M, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, const N: usize> Copy for EdgeProducer<'_, M, N> {}

impl<M: RawMutex, const N: usize> PinInterrupt for EdgeProducer<'_, M, N> {
    fn pin(&self) -> PinId {
        self.pin
    }

    fn on_interrupt<R: LevelReader + ?Sized>(&self, reader: &R) {
        // Drops are counted by the bridge
        let _ = self.on_edge(reader);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use pinwatch_hal::Level;

    struct FixedLevel(Level);

    impl LevelReader for FixedLevel {
        fn read_level(&self, _pin: PinId) -> Level {
            self.0
        }
    }

    #[test]
    fn test_producer_tags_its_pin() {
        let bridge = EventBridge::<CriticalSectionRawMutex, 4>::new();
        let producer = EdgeProducer::new(PinId(7), &bridge);

        assert_eq!(PinInterrupt::pin(&producer), PinId(7));
        assert!(producer.on_edge(&FixedLevel(Level::High)));
        producer.on_interrupt(&FixedLevel(Level::Low));

        assert_eq!(bridge.try_receive(), Some(PinEvent::new(PinId(7), Level::High)));
        assert_eq!(bridge.try_receive(), Some(PinEvent::new(PinId(7), Level::Low)));
    }

    #[test]
    fn test_producer_reports_drop() {
        let bridge = EventBridge::<CriticalSectionRawMutex, 1>::new();
        let producer = EdgeProducer::new(PinId(2), &bridge);

        assert!(producer.on_edge(&FixedLevel(Level::High)));
        assert!(!producer.on_edge(&FixedLevel(Level::Low)));
        assert_eq!(bridge.dropped(), 1);
    }
}
