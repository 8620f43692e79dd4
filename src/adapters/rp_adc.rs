//! RP2350 ADC adapter
//!
//! Implements [`AnalogPort`] over the embassy-rp ADC in blocking mode.

use embassy_rp::adc::{Adc, Blocking, Channel};
use heapless::Vec;

use crate::ports::adc::{AnalogChannel, AnalogPort};

/// Blocking ADC adapter with a fixed table of bound inputs.
///
/// `N` is the number of analog channels the adapter can serve. A failed
/// conversion or a read on an unbound channel yields code 0, which the
/// pipeline already treats as the wiring-fault sentinel, so hardware
/// trouble surfaces the same way a broken divider does.
pub struct RpAdc<'a, const N: usize> {
    adc: Adc<'a, Blocking>,
    channels: Vec<(AnalogChannel, Channel<'a>), N>,
}

impl<'a, const N: usize> RpAdc<'a, N> {
    /// Wrap an ADC peripheral in blocking mode.
    pub fn new(adc: Adc<'a, Blocking>) -> Self {
        Self {
            adc,
            channels: Vec::new(),
        }
    }

    /// Bind `channel` to a configured ADC input.
    ///
    /// Hands the input back when the table is already full.
    pub fn bind(&mut self, channel: AnalogChannel, input: Channel<'a>) -> Result<(), Channel<'a>> {
        self.channels
            .push((channel, input))
            .map_err(|(_, input)| input)
    }
}

impl<'a, const N: usize> AnalogPort for RpAdc<'a, N> {
    fn read(&mut self, channel: AnalogChannel) -> u16 {
        match self.channels.iter_mut().find(|(id, _)| *id == channel) {
            Some((_, input)) => self.adc.blocking_read(input).unwrap_or(0),
            None => 0,
        }
    }
}
