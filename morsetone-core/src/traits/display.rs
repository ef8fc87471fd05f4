//! Segment display trait

use crate::decode::Note;
use crate::input::{GroupSnapshot, Symbol};
use crate::state::Mode;

/// Seven-segment pattern shown for a dot (digit "1")
pub const DOT_SEGMENTS: u8 = 0x06;

/// Seven-segment pattern shown for a dash (digit "2")
pub const DASH_SEGMENTS: u8 = 0x5B;

/// All segments and the decimal point
pub const ALL_SEGMENTS: u8 = 0xFF;

/// Pattern shown while recording ("r")
pub const RECORD_SEGMENTS: u8 = 0x50;

/// Pattern shown while playback is pending ("P")
pub const PLAYBACK_SEGMENTS: u8 = 0x73;

/// Pattern shown after a melody was saved ("S")
pub const SAVED_SEGMENTS: u8 = 0x6D;

/// Segment pattern for a symbol
pub fn symbol_segments(symbol: Symbol) -> u8 {
    match symbol {
        Symbol::Dot => DOT_SEGMENTS,
        Symbol::Dash => DASH_SEGMENTS,
    }
}

/// Four-digit segment display
///
/// Write-only. The display is driven straight from GPIO, so none of the
/// operations can fail.
pub trait SegmentDisplay {
    /// Write one segment pattern to each digit (`0` blanks a digit)
    fn write_digits(&mut self, digits: [u8; 4]);

    /// Blank every digit
    fn clear(&mut self) {
        self.write_digits([0; 4]);
    }

    /// Show which positions of the current group hold a dot or a dash
    fn show_group(&mut self, snapshot: &GroupSnapshot) {
        let mut digits = [0u8; 4];
        for (digit, symbol) in digits.iter_mut().zip(snapshot.iter()) {
            *digit = symbol.map(symbol_segments).unwrap_or(0);
        }
        self.write_digits(digits);
    }

    /// Show the name of a decoded note on the first digit
    fn show_note(&mut self, note: &Note) {
        self.write_digits([note.display_code, 0, 0, 0]);
    }

    /// Show the mode indicator
    fn show_mode(&mut self, mode: Mode) {
        let pattern = match mode {
            Mode::Normal => 0,
            Mode::Recording => RECORD_SEGMENTS,
            Mode::PlaybackPending => PLAYBACK_SEGMENTS,
        };
        self.write_digits([pattern; 4]);
    }

    /// Light everything (decode failure)
    fn show_error(&mut self) {
        self.write_digits([ALL_SEGMENTS; 4]);
    }

    /// Confirm that a melody was saved
    fn show_confirmation(&mut self) {
        self.write_digits([SAVED_SEGMENTS; 4]);
    }
}
