//! Reserved command groups

use crate::input::Symbol;
use crate::input::Symbol::{Dash, Dot};

/// Control actions entered as a reserved group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `....` - save the next melody instead of playing it
    StartRecord,
    /// `----` - replace the next melody with the stored one and play it
    RequestPlayback,
}

const START_RECORD: [Symbol; 4] = [Dot, Dot, Dot, Dot];
const REQUEST_PLAYBACK: [Symbol; 4] = [Dash, Dash, Dash, Dash];

impl Command {
    /// Match a group against the reserved sequences
    pub fn from_group(group: &[Symbol]) -> Option<Self> {
        if group == START_RECORD {
            Some(Command::StartRecord)
        } else if group == REQUEST_PLAYBACK {
            Some(Command::RequestPlayback)
        } else {
            None
        }
    }

    /// The symbol sequence that enters this command
    pub fn pattern(self) -> &'static [Symbol] {
        match self {
            Command::StartRecord => &START_RECORD,
            Command::RequestPlayback => &REQUEST_PLAYBACK,
        }
    }
}
