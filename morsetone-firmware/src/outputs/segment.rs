//! Four-digit multiplexed seven-segment display
//!
//! The decoder task writes digit patterns through [`DisplayHandle`]; the
//! display task owns the pins and scans the digits.

use embedded_hal::digital::{OutputPin, PinState};

use morsetone_core::traits::SegmentDisplay;

use crate::channels::DISPLAY_DIGITS;

/// Segment lines a-g and the decimal point, plus one select line per digit
pub struct SegmentPins<P> {
    segments: [P; 8],
    digits: [P; 4],
}

impl<P: OutputPin> SegmentPins<P> {
    /// Create the display driver with every line low
    pub fn new(segments: [P; 8], digits: [P; 4]) -> Self {
        let mut pins = Self { segments, digits };
        pins.blank();
        pins
    }

    /// Deselect all digits
    pub fn blank(&mut self) {
        for select in self.digits.iter_mut() {
            let _ = select.set_low();
        }
    }

    /// Light one digit with a segment pattern, all other digits off
    pub fn show_digit(&mut self, index: usize, pattern: u8) {
        self.blank();
        if pattern == 0 || index >= self.digits.len() {
            return;
        }

        for (bit, segment) in self.segments.iter_mut().enumerate() {
            let _ = segment.set_state(PinState::from(pattern & (1 << bit) != 0));
        }
        let _ = self.digits[index].set_high();
    }
}

/// Display front end used by the decoder task
///
/// Publishes the latest patterns to the display task; a newer pattern
/// replaces one that was not yet picked up.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayHandle;

impl SegmentDisplay for DisplayHandle {
    fn write_digits(&mut self, digits: [u8; 4]) {
        DISPLAY_DIGITS.signal(digits);
    }
}
