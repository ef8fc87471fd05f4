//! Buzzer driven as a toggled GPIO
//!
//! Plays [`ToneBurst`]s by switching the pin each half-cycle. Timing comes
//! from `embassy_time`, so other tasks keep running between toggles.

use embassy_time::Timer;
use embedded_hal::digital::{OutputPin, PinState};

use morsetone_core::config::PipelineConfig;
use morsetone_core::melody::{Melody, ToneBurst};
use morsetone_core::traits::ToneOutput;

/// Passive buzzer on a single output pin
pub struct Buzzer<P> {
    pin: P,
}

impl<P: OutputPin> Buzzer<P> {
    /// Create a buzzer, output off
    pub fn new(pin: P) -> Self {
        let mut buzzer = Self { pin };
        buzzer.set_on(false);
        buzzer
    }

    /// Play one toggle burst, leaving the output off
    pub async fn play_burst(&mut self, burst: ToneBurst) {
        for level in burst.levels() {
            self.set_on(level);
            Timer::after_micros(burst.half_period_us as u64).await;
        }
        self.set_on(false);
    }

    /// Play every note of a melody in order
    pub async fn play_melody(&mut self, melody: &Melody, config: &PipelineConfig) {
        for frequency in melody.iter() {
            let burst = ToneBurst::for_note(*frequency, config.note_duration_ms);
            if burst.is_silent() {
                // Rest for the same length as a note
                Timer::after_millis(config.note_duration_ms as u64).await;
            } else {
                self.play_burst(burst).await;
            }
            Timer::after_millis(config.note_gap_ms as u64).await;
        }
    }

    /// Fixed-pitch decode failure beep
    pub async fn error_beep(&mut self, config: &PipelineConfig) {
        let burst = ToneBurst::for_note(config.error_beep_hz, config.error_beep_ms);
        self.play_burst(burst).await;
    }
}

impl<P: OutputPin> ToneOutput for Buzzer<P> {
    fn set_on(&mut self, on: bool) {
        // GPIO writes are infallible on the RP2040
        let _ = self.pin.set_state(PinState::from(on));
    }
}
