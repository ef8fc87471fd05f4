//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum symbols in one group
pub const SYMBOL_CAPACITY: usize = 4;

/// Maximum notes in one melody
pub const MELODY_CAPACITY: usize = 8;

/// Number of lamps in the indicator bank (one bit each)
pub const LAMP_COUNT: usize = 8;

/// How the word-break detector reacts to a dark light sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WordBreakTrigger {
    /// Fire once per downward threshold crossing
    #[default]
    Edge,
    /// Fire on every sample below the threshold (legacy behavior)
    Level,
}

/// What to do with a word break that finalizes an empty group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyGroupPolicy {
    /// Drop the group before decoding, no feedback
    #[default]
    Filter,
    /// Decode it anyway and signal a decode failure (legacy behavior)
    Report,
}

/// Pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineConfig {
    /// Light level below which a word break is raised (raw ADC units)
    pub light_threshold: u16,
    /// Word-break trigger mode
    pub word_break: WordBreakTrigger,
    /// Empty group handling
    pub empty_group: EmptyGroupPolicy,
    /// Minimum spacing between accepted presses of one button (ms)
    pub debounce_ms: u32,
    /// Light sensor sampling period (ms)
    pub sample_period_ms: u32,
    /// Playback duration of one note (ms)
    pub note_duration_ms: u32,
    /// Pause between notes during playback (ms)
    pub note_gap_ms: u32,
    /// Error beep pitch (Hz)
    pub error_beep_hz: f32,
    /// Error beep duration (ms)
    pub error_beep_ms: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            light_threshold: 500,
            word_break: WordBreakTrigger::Edge,
            empty_group: EmptyGroupPolicy::Filter,
            debounce_ms: 200,
            sample_period_ms: 50,
            note_duration_ms: 400,
            note_gap_ms: 50,
            error_beep_hz: 1000.0,
            error_beep_ms: 300,
        }
    }
}

impl PipelineConfig {
    /// Configuration reproducing the original firmware's quirks:
    /// level-triggered word breaks and repeated errors on empty groups
    pub fn legacy() -> Self {
        Self {
            word_break: WordBreakTrigger::Level,
            empty_group: EmptyGroupPolicy::Report,
            ..Self::default()
        }
    }
}
