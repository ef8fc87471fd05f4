//! Flash slot storage for RP2040
//!
//! Uses sequential-storage for wear-leveled key-value storage in the last
//! 64KB of flash. Each melody slot is one map item keyed by [`SlotKey`]
//! holding the little-endian bytes of an `f32`. A slot with no item reads
//! back as NaN.
//!
//! Implements the `SlotStorage` trait from `morsetone-hal`.

use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use embedded_storage_async::nor_flash::NorFlash;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

// Re-export shared types from morsetone-hal
pub use morsetone_hal::flash::{FlashError, SlotKey};

/// Flash storage configuration
pub const FLASH_SIZE: usize = 2 * 1024 * 1024; // 2MB flash on the Pico
pub const MELODY_PARTITION_SIZE: usize = 64 * 1024; // 64KB for melody slots
pub const MELODY_PARTITION_START: usize = FLASH_SIZE - MELODY_PARTITION_SIZE;

/// Flash range for the melody partition
pub const MELODY_RANGE: core::ops::Range<u32> =
    (MELODY_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Scratch buffer size for map operations (key + one f32 + headers)
const DATA_BUFFER_SIZE: usize = 32;

/// RP2040 flash slot storage
pub struct Rp2040SlotStorage<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> Rp2040SlotStorage<'d> {
    /// Create a new flash storage instance
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }
}

impl<'d> morsetone_hal::SlotStorage for Rp2040SlotStorage<'d> {
    async fn read(&mut self, slot: SlotKey) -> Result<f32, FlashError> {
        let mut data_buffer = [0u8; DATA_BUFFER_SIZE];

        let result = map::fetch_item::<SlotKey, &[u8], _>(
            &mut self.flash,
            MELODY_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &slot,
        )
        .await;

        match result {
            Ok(Some(data)) => {
                let bytes: [u8; 4] = data.try_into().map_err(|_| FlashError::Corrupted)?;
                Ok(f32::from_le_bytes(bytes))
            }
            // Never written
            Ok(None) => Ok(f32::NAN),
            Err(_) => Err(FlashError::Storage),
        }
    }

    async fn write(&mut self, slot: SlotKey, value: f32) -> Result<(), FlashError> {
        let mut data_buffer = [0u8; DATA_BUFFER_SIZE];
        let bytes = value.to_le_bytes();
        let data: &[u8] = &bytes;

        map::store_item(
            &mut self.flash,
            MELODY_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &slot,
            &data,
        )
        .await
        .map_err(|e| match e {
            sequential_storage::Error::FullStorage => FlashError::Full,
            sequential_storage::Error::Corrupted { .. } => FlashError::Corrupted,
            _ => FlashError::Storage,
        })
    }

    async fn erase_all(&mut self) -> Result<(), FlashError> {
        self.flash
            .erase(MELODY_PARTITION_START as u32, FLASH_SIZE as u32)
            .await
            .map_err(|_| FlashError::Flash)
    }
}
