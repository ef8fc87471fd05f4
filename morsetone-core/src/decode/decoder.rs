//! Group decoder
//!
//! Commands are recognized only while the melody is empty; everywhere else
//! the reserved groups fall through to the note table, where they fail.

use super::command::Command;
use super::table::{lookup_note, Note};
use crate::input::Symbol;

/// Successful decode result
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoded {
    /// A reserved command group
    Command(Command),
    /// A note from the table
    Note(Note),
}

/// Reasons a group fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Word break with no symbols entered
    EmptyGroup,
    /// Group matches neither a note nor a command
    NoMatch,
}

/// Decode a finalized group
///
/// `position` is the number of notes already in the melody.
pub fn decode(group: &[Symbol], position: usize) -> Result<Decoded, DecodeError> {
    if group.is_empty() {
        return Err(DecodeError::EmptyGroup);
    }

    if position == 0 {
        if let Some(command) = Command::from_group(group) {
            return Ok(Decoded::Command(command));
        }
    }

    lookup_note(group)
        .map(Decoded::Note)
        .ok_or(DecodeError::NoMatch)
}
