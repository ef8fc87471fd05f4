//! Group decoding
//!
//! A finalized group is either one of the two reserved commands (only at
//! the start of a melody), a note from the Morse table, or a failure.

pub mod command;
pub mod decoder;
pub mod table;

pub use command::Command;
pub use decoder::{decode, DecodeError, Decoded};
pub use table::{lookup_note, MorseEntry, Note, MORSE_TABLE};
