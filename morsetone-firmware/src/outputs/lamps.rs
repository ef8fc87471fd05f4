//! Indicator lamp bank

use embedded_hal::digital::{OutputPin, PinState};

use morsetone_core::traits::IndicatorLamps;

/// One GPIO per lamp; bit `i` of the mask drives `pins[i]`
pub struct LampBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> LampBank<P, N> {
    /// Create a lamp bank, all lamps off
    pub fn new(pins: [P; N]) -> Self {
        let mut bank = Self { pins };
        bank.set_mask(0);
        bank
    }
}

impl<P: OutputPin, const N: usize> IndicatorLamps for LampBank<P, N> {
    fn set_mask(&mut self, mask: u8) {
        for (i, pin) in self.pins.iter_mut().enumerate() {
            let lit = i < 8 && mask & (1 << i) != 0;
            // GPIO writes are infallible on the RP2040
            let _ = pin.set_state(PinState::from(lit));
        }
    }
}
