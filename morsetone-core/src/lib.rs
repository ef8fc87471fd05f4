//! Board-agnostic core logic for the Morse melody keyer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Symbol capture, debounce and word-break detection
//! - Morse table lookup and the two reserved command groups
//! - Mode state machine (normal / recording / playback pending)
//! - Melody accumulation, tone model and persistence
//! - The decode pipeline tying these together
//! - Output traits (segment display, indicator lamps, tone output)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod decode;
pub mod input;
pub mod melody;
pub mod pipeline;
pub mod state;
pub mod traits;

pub use pipeline::{Completion, Outcome, Pipeline};
