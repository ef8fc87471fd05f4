//! Hardware abstraction traits
//!
//! These traits define the interface between the decode pipeline
//! and the output hardware.

pub mod display;
pub mod output;

pub use display::SegmentDisplay;
pub use output::{IndicatorLamps, ToneOutput};
