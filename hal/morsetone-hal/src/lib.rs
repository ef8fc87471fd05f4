//! Morsetone Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that chip-specific HALs
//! implement. The core pipeline and the persistence layer only see these
//! traits, so the same logic runs on the RP2040 and on the host in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  morsetone-core / morsetone-firmware    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  morsetone-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ morsetone-hal-│
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`flash::SlotStorage`] - Non-volatile melody slots
//! - [`adc::AnalogInput`] - On-demand analog sampling

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod flash;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use flash::{FlashError, SlotKey, SlotStorage, SLOT_COUNT};
