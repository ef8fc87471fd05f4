//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicU32;

use morsetone_core::input::Symbol;

/// Channel capacity for symbols from the buttons
const SYMBOL_CHANNEL_SIZE: usize = 8;

/// Symbols from the button tasks, consumed only by the decoder task
///
/// The decoder task is the single owner of the group buffer; button
/// tasks never touch it directly.
pub static SYMBOL_CHANNEL: Channel<CriticalSectionRawMutex, Symbol, SYMBOL_CHANNEL_SIZE> =
    Channel::new();

/// Symbols dropped because the channel was full
pub static DROPPED_SYMBOLS: AtomicU32 = AtomicU32::new(0);

/// Segment patterns for the four display digits (updated by decoder task)
pub static DISPLAY_DIGITS: Signal<CriticalSectionRawMutex, [u8; 4]> = Signal::new();
