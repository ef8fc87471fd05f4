//! Square-wave tone model
//!
//! A note is played as a burst of output toggles: each half-cycle lasts
//! half the period of the note, and the number of half-cycles scales with
//! the frequency so every note lasts about the same time. This is a
//! buzzer toggle model, not a precision oscillator.

/// Microseconds in half a second (one half-cycle at 1 Hz)
const HALF_SECOND_US: f32 = 500_000.0;

/// One toggle burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneBurst {
    /// Duration of each on or off phase (µs)
    pub half_period_us: u32,
    /// Number of on/off phases
    pub half_cycles: u32,
}

impl ToneBurst {
    /// A burst that keeps the output off
    pub const SILENT: ToneBurst = ToneBurst {
        half_period_us: 0,
        half_cycles: 0,
    };

    /// Burst for a note of `frequency_hz` lasting about `duration_ms`
    ///
    /// Non-positive or NaN frequencies give [`ToneBurst::SILENT`].
    pub fn for_note(frequency_hz: f32, duration_ms: u32) -> Self {
        if frequency_hz.is_nan() || frequency_hz <= 0.0 {
            return Self::SILENT;
        }

        let half_period_us = (HALF_SECOND_US / frequency_hz) as u32;
        let half_cycles = (2.0 * frequency_hz * duration_ms as f32 / 1000.0) as u32;

        if half_period_us == 0 || half_cycles == 0 {
            return Self::SILENT;
        }

        Self {
            half_period_us,
            half_cycles,
        }
    }

    /// Check if the burst produces no sound
    pub fn is_silent(&self) -> bool {
        self.half_cycles == 0
    }

    /// Output level for each half-cycle, starting high
    pub fn levels(&self) -> impl Iterator<Item = bool> {
        (0..self.half_cycles).map(|i| i % 2 == 0)
    }
}
