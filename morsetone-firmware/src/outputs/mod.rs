//! Output drivers
//!
//! GPIO-backed implementations of the core output traits, generic over
//! `embedded_hal` output pins.

pub mod buzzer;
pub mod lamps;
pub mod segment;

pub use buzzer::Buzzer;
pub use lamps::LampBank;
pub use segment::{DisplayHandle, SegmentPins};
