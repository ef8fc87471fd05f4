//! Melody persistence
//!
//! A melody occupies the [`SLOT_COUNT`](morsetone_hal::SLOT_COUNT) storage
//! slots in order, one frequency each. Loading stops at the first slot
//! that was never written (reads back as NaN): entries already read stay
//! applied and the remaining output entries keep their previous values.

use morsetone_hal::{FlashError, SlotKey, SlotStorage};

use super::track::Melody;
use crate::traits::SegmentDisplay;

/// Result of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadStatus {
    /// Every slot held a value
    Complete,
    /// Stopped at an unwritten slot after `loaded` entries
    Partial {
        /// Number of entries overwritten from storage
        loaded: usize,
    },
}

/// Write a melody to storage, slot by slot
///
/// If the storage reports corruption or runs out of space, every slot is
/// erased and the whole melody is written once more.
pub async fn save<S: SlotStorage>(storage: &mut S, melody: &Melody) -> Result<(), FlashError> {
    match write_slots(storage, melody).await {
        Err(FlashError::Corrupted | FlashError::Full) => {
            storage.erase_all().await?;
            write_slots(storage, melody).await
        }
        result => result,
    }
}

async fn write_slots<S: SlotStorage>(storage: &mut S, melody: &Melody) -> Result<(), FlashError> {
    for (key, frequency) in SlotKey::all().zip(melody.iter()) {
        storage.write(key, *frequency).await?;
    }
    Ok(())
}

/// Save a melody and report the result on the display
///
/// The confirmation appears only after every slot was written; a failed
/// save shows the error pattern instead.
pub async fn save_with_feedback<S: SlotStorage, D: SegmentDisplay>(
    storage: &mut S,
    melody: &Melody,
    display: &mut D,
) -> Result<(), FlashError> {
    let result = save(storage, melody).await;
    match result {
        Ok(()) => display.show_confirmation(),
        Err(_) => display.show_error(),
    }
    result
}

/// Read a melody from storage into `melody`
///
/// A partial load is not an error; the caller still gets a playable melody
/// whose tail is whatever `melody` held before.
pub async fn load<S: SlotStorage>(
    storage: &mut S,
    melody: &mut Melody,
) -> Result<LoadStatus, FlashError> {
    for (index, (key, slot)) in SlotKey::all().zip(melody.iter_mut()).enumerate() {
        let value = storage.read(key).await?;
        if value.is_nan() {
            return Ok(LoadStatus::Partial { loaded: index });
        }
        *slot = value;
    }
    Ok(LoadStatus::Complete)
}
