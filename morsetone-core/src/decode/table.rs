//! Morse note table
//!
//! Seven groups map to the notes of the C major scale. Matching is exact
//! on both length and content: `-.` is not a prefix match for `-..`.

use crate::input::Symbol;
use crate::input::Symbol::{Dash, Dot};

/// A decoded musical note
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Note name (`'A'`..=`'G'`)
    pub name: char,
    /// Pitch in Hz
    pub frequency_hz: f32,
    /// Seven-segment pattern for the note name (bit 0 = segment a)
    pub display_code: u8,
}

impl Note {
    const fn new(name: char, frequency_hz: f32, display_code: u8) -> Self {
        Self {
            name,
            frequency_hz,
            display_code,
        }
    }
}

/// One row of the note table
#[derive(Debug, Clone, Copy)]
pub struct MorseEntry {
    /// Exact symbol sequence
    pub pattern: &'static [Symbol],
    /// Note produced by the sequence
    pub note: Note,
}

const fn entry(pattern: &'static [Symbol], note: Note) -> MorseEntry {
    MorseEntry { pattern, note }
}

/// Morse group to note mapping, in scale order from C4
pub const MORSE_TABLE: [MorseEntry; 7] = [
    entry(&[Dash, Dot, Dash, Dot], Note::new('C', 261.63, 0x39)),
    entry(&[Dash, Dot, Dot], Note::new('D', 293.66, 0x5E)),
    entry(&[Dot], Note::new('E', 329.63, 0x79)),
    entry(&[Dot, Dot, Dash, Dot], Note::new('F', 349.23, 0x71)),
    entry(&[Dash, Dash, Dot], Note::new('G', 392.00, 0x3D)),
    entry(&[Dot, Dash], Note::new('A', 440.00, 0x77)),
    entry(&[Dash, Dot, Dot, Dot], Note::new('B', 493.88, 0x7C)),
];

/// Look up a group in the note table
pub fn lookup_note(group: &[Symbol]) -> Option<Note> {
    MORSE_TABLE
        .iter()
        .find(|entry| entry.pattern == group)
        .map(|entry| entry.note)
}
