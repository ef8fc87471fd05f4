//! Events that trigger mode transitions

use crate::decode::Command;

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeEvent {
    /// A reserved group was entered at the start of a melody
    Command(Command),
    /// The save or load+play for a completed melody finished
    PendingActionComplete,
}
