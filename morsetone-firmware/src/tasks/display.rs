//! Display scan task
//!
//! Owns the segment and digit select lines and multiplexes the four
//! digits. New patterns arrive on `DISPLAY_DIGITS`.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use crate::channels::DISPLAY_DIGITS;
use crate::outputs::SegmentPins;

/// Time each digit stays lit per scan
const DIGIT_PERIOD_MS: u64 = 2;

#[embassy_executor::task]
pub async fn display_task(mut pins: SegmentPins<Output<'static>>) {
    info!("Display task started");

    let mut ticker = Ticker::every(Duration::from_millis(DIGIT_PERIOD_MS));
    let mut digits = [0u8; 4];
    let mut index = 0;

    loop {
        if let Some(latest) = DISPLAY_DIGITS.try_take() {
            digits = latest;
        }

        pins.show_digit(index, digits[index]);
        index = (index + 1) % digits.len();

        ticker.next().await;
    }
}
