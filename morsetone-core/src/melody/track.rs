//! Melody track
//!
//! Append-only list of decoded notes. Once it holds [`MELODY_CAPACITY`]
//! notes it is consumed as a [`Melody`] and starts over empty.

use heapless::Vec;

use crate::config::{LAMP_COUNT, MELODY_CAPACITY};
use crate::decode::Note;

/// A complete melody as stored and played: one frequency per note
pub type Melody = [f32; MELODY_CAPACITY];

/// Returned when appending to a full track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackFull;

/// Notes entered so far
#[derive(Debug, Clone, Default)]
pub struct MelodyTrack {
    notes: Vec<Note, MELODY_CAPACITY>,
}

impl MelodyTrack {
    /// Create an empty track
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Append a note
    ///
    /// Returns the new position (number of notes held).
    pub fn push(&mut self, note: Note) -> Result<usize, TrackFull> {
        self.notes.push(note).map_err(|_| TrackFull)?;
        Ok(self.notes.len())
    }

    /// Number of notes held
    pub fn position(&self) -> usize {
        self.notes.len()
    }

    /// Check if the melody is complete
    pub fn is_full(&self) -> bool {
        self.notes.is_full()
    }

    /// Notes in entry order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Frequencies of the held notes; positions not yet entered are 0.0
    pub fn frequencies(&self) -> Melody {
        let mut melody = [0.0; MELODY_CAPACITY];
        for (slot, note) in melody.iter_mut().zip(self.notes.iter()) {
            *slot = note.frequency_hz;
        }
        melody
    }

    /// Drop all notes
    pub fn clear(&mut self) {
        self.notes.clear();
    }
}

/// Indicator lamp pattern for a track position
///
/// One bit per completed position. Positions past the lamp bank width get
/// no lamp.
pub fn lamp_mask(position: usize) -> u8 {
    let lit = position.min(LAMP_COUNT) as u32;
    if lit >= u8::BITS {
        u8::MAX
    } else {
        (1u8 << lit) - 1
    }
}
