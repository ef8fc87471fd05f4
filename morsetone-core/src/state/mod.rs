//! Mode state machine
//!
//! Tracks what happens to the melody being entered: played directly,
//! saved to storage, or replaced by the stored melody.

pub mod events;
pub mod machine;

pub use events::ModeEvent;
pub use machine::Mode;
