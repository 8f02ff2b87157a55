//! Bounded interrupt-safe event queue

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::channel::{Channel, TrySendError};
use portable_atomic::{AtomicU32, Ordering};

use crate::config::EVENT_QUEUE_CAPACITY;
use crate::event::PinEvent;

/// Fixed-capacity FIFO carrying [`PinEvent`]s to a single consumer
///
/// The only state shared between interrupt and task code. Pushing never
/// blocks: the raw mutex is only held for the copy into the ring, and a
/// full queue drops the new event.
///
/// Usually placed in a `static`:
///
/// ```ignore
/// static BRIDGE: EventBridge<CriticalSectionRawMutex, 10> = EventBridge::new();
/// ```
pub struct EventBridge<M: RawMutex = CriticalSectionRawMutex, const N: usize = EVENT_QUEUE_CAPACITY>
{
    queue: Channel<M, PinEvent, N>,
    /// Events discarded because the queue was full
    dropped: AtomicU32,
}

impl<M: RawMutex, const N: usize> EventBridge<M, N> {
    /// Create an empty bridge
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Queue an event without blocking
    ///
    /// Returns `false` if the queue was full and the event was dropped.
    /// Safe to call from interrupt context.
    #[inline]
    pub fn push(&self, event: PinEvent) -> bool {
        match self.queue.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_event)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                #[cfg(feature = "defmt")]
                defmt::trace!("Event queue full, dropping {:?}", _event);
                false
            }
        }
    }

    /// Wait for the next event
    pub async fn receive(&self) -> PinEvent {
        self.queue.receive().await
    }

    /// Take the next event if one is queued
    pub fn try_receive(&self) -> Option<PinEvent> {
        self.queue.try_receive().ok()
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no events are queued
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Check if the next push would be dropped
    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    /// Queue capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Events dropped since creation (or the last [`take_dropped`](Self::take_dropped))
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Read and reset the dropped counter (e.g. after reporting)
    pub fn take_dropped(&self) -> u32 {
        self.dropped.swap(0, Ordering::Relaxed)
    }

    /// Discard all queued events
    pub fn clear(&self) {
        self.queue.clear();
    }
}

impl<M: RawMutex, const N: usize> Default for EventBridge<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinwatch_hal::{Level, PinId};

    fn event(pin: u8, level: Level) -> PinEvent {
        PinEvent::new(PinId(pin), level)
    }

    #[test]
    fn test_push_and_receive_fifo() {
        let bridge = EventBridge::<CriticalSectionRawMutex, 4>::new();

        assert!(bridge.push(event(1, Level::High)));
        assert!(bridge.push(event(2, Level::Low)));
        assert_eq!(bridge.len(), 2);

        assert_eq!(bridge.try_receive(), Some(event(1, Level::High)));
        assert_eq!(bridge.try_receive(), Some(event(2, Level::Low)));
        assert_eq!(bridge.try_receive(), None);
        assert!(bridge.is_empty());
    }

    #[test]
    fn test_full_queue_drops_newest() {
        let bridge = EventBridge::<CriticalSectionRawMutex, 2>::new();

        assert!(bridge.push(event(1, Level::High)));
        assert!(bridge.push(event(2, Level::High)));
        assert!(bridge.is_full());

        assert!(!bridge.push(event(3, Level::High)));
        assert!(!bridge.push(event(4, Level::High)));
        assert_eq!(bridge.dropped(), 2);

        assert_eq!(bridge.try_receive(), Some(event(1, Level::High)));
        assert_eq!(bridge.try_receive(), Some(event(2, Level::High)));
        assert_eq!(bridge.try_receive(), None);
    }

    #[test]
    fn test_take_dropped_resets() {
        let bridge = EventBridge::<CriticalSectionRawMutex, 1>::new();

        bridge.push(event(1, Level::Low));
        bridge.push(event(1, Level::High));
        assert_eq!(bridge.take_dropped(), 1);
        assert_eq!(bridge.dropped(), 0);
    }

    #[test]
    fn test_default_capacity() {
        let bridge: EventBridge = EventBridge::new();
        assert_eq!(bridge.capacity(), EVENT_QUEUE_CAPACITY);
        assert_eq!(bridge.capacity(), 10);
    }

    #[test]
    fn test_clear() {
        let bridge = EventBridge::<CriticalSectionRawMutex, 4>::new();
        bridge.push(event(5, Level::High));
        bridge.push(event(6, Level::Low));
        bridge.clear();
        assert!(bridge.is_empty());
        assert_eq!(bridge.dropped(), 0);
    }
}
