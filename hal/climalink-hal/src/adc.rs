//! Analog-to-digital converter abstraction

/// A single configured ADC channel
///
/// One call produces one raw conversion result. The result width is given by
/// [`AdcChannel::resolution_bits`]; a driver may return values above the
/// nominal range when the input is overdriven, and callers are expected to
/// reject those.
pub trait AdcChannel {
    /// Error type for conversion failures
    type Error: core::fmt::Debug;

    /// Perform one conversion and return the raw sample
    fn read_raw(&mut self) -> Result<u16, Self::Error>;

    /// Resolution of a raw sample in bits
    fn resolution_bits(&self) -> u8;

    /// Largest raw value inside the nominal range
    fn max_raw(&self) -> u16 {
        ((1u32 << self.resolution_bits()) - 1) as u16
    }
}
