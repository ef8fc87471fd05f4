//! Lamp bank and tone output traits

/// Bank of indicator lamps, one bit per lamp
pub trait IndicatorLamps {
    /// Light the lamps whose bits are set, turn the others off
    fn set_mask(&mut self, mask: u8);

    /// Turn every lamp off
    fn clear(&mut self) {
        self.set_mask(0);
    }
}

/// Tone generator output
///
/// The caller owns the timing; implementations only switch the output.
pub trait ToneOutput {
    /// Drive the output on or off
    fn set_on(&mut self, on: bool);
}
