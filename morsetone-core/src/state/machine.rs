//! Mode definition
//!
//! One enumerated value replaces the independent record/playback flags,
//! so the two pending actions can never be armed at the same time.

use super::events::ModeEvent;
use crate::decode::Command;

/// What happens when the melody fills up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Play the melody through the buzzer
    #[default]
    Normal,
    /// Save the melody to storage
    Recording,
    /// Discard the melody and play the stored one
    PlaybackPending,
}

impl Mode {
    /// Process an event and return the next mode
    pub fn transition(self, event: ModeEvent) -> Self {
        use Mode::*;

        match (self, event) {
            (Normal, ModeEvent::Command(Command::StartRecord)) => Recording,
            (Normal, ModeEvent::Command(Command::RequestPlayback)) => PlaybackPending,

            (Recording, ModeEvent::PendingActionComplete) => Normal,
            (PlaybackPending, ModeEvent::PendingActionComplete) => Normal,

            // Commands are not accepted while another action is armed
            _ => self,
        }
    }
}
