//! User event handlers

use pinwatch_hal::{Level, PinId};

use crate::event::PinEvent;

/// Failure reported by a handler
///
/// The worker counts and logs it, then carries on with the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandlerFault {
    /// Short static description
    pub reason: &'static str,
}

impl HandlerFault {
    /// Create a fault with a static reason
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Receives pin events in task context
///
/// Implemented for every `FnMut(PinId, Level)` closure. Implement it
/// directly when the handler can fail.
pub trait EventHandler {
    /// Handle one event
    fn handle(&mut self, event: PinEvent) -> Result<(), HandlerFault>;
}

impl<F> EventHandler for F
where
    F: FnMut(PinId, Level),
{
    fn handle(&mut self, event: PinEvent) -> Result<(), HandlerFault> {
        self(event.pin, event.level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_handler() {
        let mut seen = None;
        let mut handler = |pin: PinId, level: Level| seen = Some((pin, level));

        assert!(handler.handle(PinEvent::new(PinId(3), Level::High)).is_ok());
        assert_eq!(seen, Some((PinId(3), Level::High)));
    }

    struct RejectLow;

    impl EventHandler for RejectLow {
        fn handle(&mut self, event: PinEvent) -> Result<(), HandlerFault> {
            if event.level.is_low() {
                return Err(HandlerFault::new("low level"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_fallible_handler() {
        let mut handler = RejectLow;
        assert!(handler.handle(PinEvent::new(PinId(1), Level::High)).is_ok());
        assert_eq!(
            handler.handle(PinEvent::new(PinId(1), Level::Low)),
            Err(HandlerFault::new("low level"))
        );
    }
}
