//! Analog input abstractions

/// Errors from an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// The conversion did not complete
    ConversionError,
}

/// Analog input sampled on demand
///
/// Each call performs one conversion and waits for it to finish.
pub trait AnalogInput {
    /// Sample the input and return the raw level
    fn read_level(&mut self) -> impl core::future::Future<Output = Result<u16, AdcError>>;
}
