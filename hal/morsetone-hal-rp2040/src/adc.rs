//! ADC light sensor
//!
//! RP2040 has a single 12-bit ADC; the light-dependent resistor divider is
//! wired to one of the GPIO26-29 inputs.

use embassy_rp::adc::{Adc, Async, Channel};

use morsetone_hal::{AdcError, AnalogInput};

/// Full-scale reading of the 12-bit ADC
pub const ADC_MAX: u16 = 4095;

/// Ambient light sensor on an ADC channel
pub struct LightSensor<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
}

impl<'d> LightSensor<'d> {
    /// Create a light sensor from an initialized ADC and its channel
    pub fn new(adc: Adc<'d, Async>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl<'d> AnalogInput for LightSensor<'d> {
    async fn read_level(&mut self) -> Result<u16, AdcError> {
        self.adc
            .read(&mut self.channel)
            .await
            .map(|level| level.min(ADC_MAX))
            .map_err(|_| AdcError::ConversionError)
    }
}
