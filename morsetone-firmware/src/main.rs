//! Morsetone - Morse melody keyer firmware
//!
//! Main firmware binary for RP2040-based boards. Two buttons key dots and
//! dashes, covering the light sensor ends a group, and every decoded group
//! becomes one note of an eight-note melody that is played, saved to
//! flash, or replaced by the stored melody.

#![no_std]
#![no_main]

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use morsetone_core::config::PipelineConfig;
use morsetone_core::input::Symbol;
use morsetone_hal_rp2040::adc::LightSensor;
use morsetone_hal_rp2040::flash::Rp2040SlotStorage;

use crate::channels::DROPPED_SYMBOLS;
use crate::outputs::{Buzzer, LampBank, SegmentPins};
use crate::tasks::decoder::DecoderResources;

mod channels;
mod outputs;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Morsetone firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = PipelineConfig::default();

    // Indicator lamps on GPIO0-7, one per melody position
    let lamps = LampBank::new([
        Output::new(p.PIN_0, Level::Low),
        Output::new(p.PIN_1, Level::Low),
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
    ]);

    // Segments a-g and dp on GPIO8-15, digit selects on GPIO16-19
    let segments = SegmentPins::new(
        [
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_11, Level::Low),
            Output::new(p.PIN_12, Level::Low),
            Output::new(p.PIN_13, Level::Low),
            Output::new(p.PIN_14, Level::Low),
            Output::new(p.PIN_15, Level::Low),
        ],
        [
            Output::new(p.PIN_16, Level::Low),
            Output::new(p.PIN_17, Level::Low),
            Output::new(p.PIN_18, Level::Low),
            Output::new(p.PIN_19, Level::Low),
        ],
    );

    // Buttons short to ground when pressed
    let dot_button = Input::new(p.PIN_20, Pull::Up);
    let dash_button = Input::new(p.PIN_21, Pull::Up);

    let buzzer = Buzzer::new(Output::new(p.PIN_22, Level::Low));

    // Light sensor divider on ADC0
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let light_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let sensor = LightSensor::new(adc, light_channel);

    let storage = Rp2040SlotStorage::new(p.FLASH, p.DMA_CH0);

    info!("Peripherals initialized");

    let resources = DecoderResources {
        sensor,
        storage,
        buzzer,
        lamps,
    };

    spawner.spawn(tasks::display_task(segments)).unwrap();
    spawner
        .spawn(tasks::decoder_task(resources, config))
        .unwrap();
    spawner
        .spawn(tasks::button_task(dot_button, Symbol::Dot, config.debounce_ms))
        .unwrap();
    spawner
        .spawn(tasks::button_task(dash_button, Symbol::Dash, config.debounce_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!(
            "Main loop heartbeat, {} symbols dropped",
            DROPPED_SYMBOLS.load(Ordering::Relaxed)
        );
    }
}
