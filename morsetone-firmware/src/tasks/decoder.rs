//! Decoder task
//!
//! Single owner of the decode pipeline. Receives symbols from the button
//! tasks, samples the light sensor on a fixed period, and acts on every
//! finalized group:
//! - Drives the display and indicator lamps
//! - Beeps on decode failures
//! - Saves, loads and plays completed melodies

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker, Timer};

use morsetone_core::config::{PipelineConfig, LAMP_COUNT, MELODY_CAPACITY};
use morsetone_core::melody::{load, save_with_feedback, LoadStatus, Melody};
use morsetone_core::pipeline::{Completion, Outcome, Pipeline};
use morsetone_core::traits::SegmentDisplay;
use morsetone_hal::AnalogInput;
use morsetone_hal_rp2040::adc::LightSensor;
use morsetone_hal_rp2040::flash::Rp2040SlotStorage;

use crate::channels::SYMBOL_CHANNEL;
use crate::outputs::{Buzzer, DisplayHandle, LampBank};

/// How long the save confirmation stays on the display
const CONFIRMATION_MS: u64 = 500;

/// Hardware owned by the decoder task
pub struct DecoderResources {
    pub sensor: LightSensor<'static>,
    pub storage: Rp2040SlotStorage<'static>,
    pub buzzer: Buzzer<Output<'static>>,
    pub lamps: LampBank<Output<'static>, LAMP_COUNT>,
}

/// Decoder task
#[embassy_executor::task]
pub async fn decoder_task(mut res: DecoderResources, config: PipelineConfig) {
    info!("Decoder task started");
    debug!("Pipeline config: {:?}", config);

    let mut pipeline = Pipeline::new(config);
    let mut display = DisplayHandle;
    display.clear();

    let mut ticker = Ticker::every(Duration::from_millis(config.sample_period_ms as u64));

    loop {
        match select(SYMBOL_CHANNEL.receive(), ticker.next()).await {
            Either::First(symbol) => match pipeline.push_symbol(symbol) {
                Some(group) => {
                    trace!("Symbol {:?}, group length {}", symbol, pipeline.group_len());
                    display.show_group(&group);
                }
                None => debug!(
                    "Group full, dropped {:?} ({} total)",
                    symbol,
                    pipeline.dropped_symbols()
                ),
            },
            Either::Second(()) => {
                let level = match res.sensor.read_level().await {
                    Ok(level) => level,
                    Err(e) => {
                        warn!("Light sensor read failed: {:?}", e);
                        continue;
                    }
                };

                if let Some(outcome) = pipeline.sample_light(level) {
                    trace!("Word break at light level {}", level);
                    handle_outcome(&mut res, &mut display, &config, outcome).await;
                }
            }
        }
    }
}

/// Act on a finalized group
async fn handle_outcome(
    res: &mut DecoderResources,
    display: &mut DisplayHandle,
    config: &PipelineConfig,
    outcome: Outcome,
) {
    outcome.present(display, &mut res.lamps);

    match outcome {
        Outcome::EmptyGroup => trace!("Empty group ignored"),
        Outcome::ModeChanged(mode) => info!("Mode changed to {:?}", mode),
        Outcome::CommandIgnored(command) => {
            warn!("Command {:?} ignored, another action is pending", command);
        }
        Outcome::NoteAdded { note, position, .. } => {
            info!(
                "Note {} ({} Hz) at position {}",
                note.name, note.frequency_hz, position
            );
        }
        Outcome::DecodeFailed(e) => {
            warn!("Decode failed: {:?}", e);
            res.buzzer.error_beep(config).await;
            display.clear();
        }
        Outcome::MelodyComplete { note, completion } => {
            info!("Melody complete with note {}", note.name);
            complete_melody(res, display, config, completion).await;
        }
    }
}

/// Perform the action armed for a completed melody
async fn complete_melody(
    res: &mut DecoderResources,
    display: &mut DisplayHandle,
    config: &PipelineConfig,
    completion: Completion,
) {
    match completion {
        Completion::Save(melody) => {
            match save_with_feedback(&mut res.storage, &melody, display).await {
                Ok(()) => {
                    info!("Melody saved");
                    Timer::after_millis(CONFIRMATION_MS).await;
                }
                Err(e) => {
                    error!("Failed to save melody: {:?}", e);
                    res.buzzer.error_beep(config).await;
                }
            }
            display.clear();
        }
        Completion::LoadAndPlay(mut melody) => {
            match load(&mut res.storage, &mut melody).await {
                Ok(LoadStatus::Complete) => info!("Stored melody loaded"),
                Ok(LoadStatus::Partial { loaded }) => {
                    warn!(
                        "Stored melody incomplete, {} of {} notes loaded",
                        loaded, MELODY_CAPACITY
                    );
                }
                Err(e) => error!("Failed to load melody: {:?}", e),
            }
            play(res, config, &melody).await;
        }
        Completion::Play(melody) => play(res, config, &melody).await,
    }
}

async fn play(res: &mut DecoderResources, config: &PipelineConfig, melody: &Melody) {
    debug!("Playing melody: {:?}", melody);
    res.buzzer.play_melody(melody, config).await;
}
