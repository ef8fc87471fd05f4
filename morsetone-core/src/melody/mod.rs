//! Melody accumulation, playback model and persistence

pub mod persistence;
pub mod tone;
pub mod track;

pub use persistence::{load, save, save_with_feedback, LoadStatus};
pub use tone::ToneBurst;
pub use track::{lamp_mask, Melody, MelodyTrack, TrackFull};
