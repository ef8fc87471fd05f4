//! RP2040-specific HAL for the Morse melody keyer
//!
//! This crate provides RP2040-specific implementations of the shared
//! `morsetone-hal` traits:
//!
//! - Flash slot storage (implements `morsetone_hal::SlotStorage`)
//! - ADC light sensor (implements `morsetone_hal::AnalogInput`)

#![no_std]

pub mod adc;
pub mod flash;

// Re-export shared traits from morsetone-hal for convenience
pub use morsetone_hal::{AnalogInput, SlotKey, SlotStorage};
