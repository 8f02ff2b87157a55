//! GPIO pins by number
//!
//! Watched pins come from config as plain numbers, so every `PIN_n`
//! peripheral is converted to `AnyPin` up front and handed out on request.

use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;
use embassy_rp::Peripherals;
use pinwatch_hal::PinId;

/// Number of user GPIOs on RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
}

/// Pin bank that holds all GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Create a pin bank from peripherals
    ///
    /// Only the GPIOs are kept; nothing else on the chip is needed for
    /// edge monitoring.
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin: PinId) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin.number() as usize)
            .ok_or(PinError::InvalidPin)?
            .take()
            .ok_or(PinError::AlreadyTaken)
    }

    /// Check if the chip has this pin
    pub const fn is_valid(pin: PinId) -> bool {
        (pin.number() as usize) < GPIO_COUNT
    }
}
