//! Analog input port - abstraction for one-shot ADC samples

/// Identifier of an analog input (the ADC channel number on the target).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogChannel(pub u8);

impl AnalogChannel {
    /// Create a channel identifier from a raw channel number.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw channel number.
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Port for acquiring raw ADC codes.
///
/// Implementations return one sample in `[0, ADC_FULL_SCALE]` per call
/// and block no longer than a single conversion. A code of 0 doubles as
/// the circuit-fault sentinel, so adapters whose read can fail report 0
/// rather than inventing an error channel of their own.
pub trait AnalogPort {
    /// Acquire one sample from `channel`.
    fn read(&mut self, channel: AnalogChannel) -> u16;
}
