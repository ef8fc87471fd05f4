//! Non-volatile slot storage abstractions
//!
//! A melody is persisted as a fixed run of numbered slots, each holding one
//! `f32` frequency. A slot that has never been written reads back as NaN.

/// Number of melody slots in storage
pub const SLOT_COUNT: u8 = 8;

/// Index of a single storage slot
///
/// Only values below [`SLOT_COUNT`] can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotKey(u8);

impl SlotKey {
    /// Create a key for the given slot index
    pub fn new(index: u8) -> Option<Self> {
        if index < SLOT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// Iterate over every slot in storage order
    pub fn all() -> impl Iterator<Item = SlotKey> {
        (0..SLOT_COUNT).map(SlotKey)
    }
}

/// Errors from flash storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Flash operation failed
    Flash,
    /// Storage operation failed
    Storage,
    /// Data corrupted or invalid
    Corrupted,
    /// Storage is full
    Full,
}

/// Slot storage trait
///
/// Implementations map each [`SlotKey`] to a persistent `f32`.
/// Reading a slot that was never written must return NaN rather than an
/// error; callers use that sentinel to detect incomplete storage.
pub trait SlotStorage {
    /// Read the value stored in a slot, or NaN if it was never written
    fn read(&mut self, slot: SlotKey) -> impl core::future::Future<Output = Result<f32, FlashError>>;

    /// Write a value to a slot
    fn write(&mut self, slot: SlotKey, value: f32) -> impl core::future::Future<Output = Result<(), FlashError>>;

    /// Erase every slot, returning them to the never-written state
    fn erase_all(&mut self) -> impl core::future::Future<Output = Result<(), FlashError>>;
}

// Implement the sequential-storage Key trait when the feature is enabled
#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for SlotKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        match SlotKey::new(buffer[0]) {
            Some(key) => Ok((key, 1)),
            None => Err(sequential_storage::map::SerializationError::InvalidFormat),
        }
    }
}
