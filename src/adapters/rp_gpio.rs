//! RP2350 GPIO adapter for the divider power gate
//!
//! Implements [`DigitalPort`] over embassy-rp push-pull outputs.

use embassy_rp::gpio::Output;
use heapless::Vec;

use crate::ports::gpio::{DigitalChannel, DigitalPort, Level};

/// Digital output adapter with a fixed table of bound pins.
///
/// Writes to channels that were never bound are dropped.
pub struct RpGate<'a, const N: usize> {
    outputs: Vec<(DigitalChannel, Output<'a>), N>,
}

impl<'a, const N: usize> RpGate<'a, N> {
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
        }
    }

    /// Bind `channel` to a configured output pin.
    ///
    /// Hands the pin back when the table is already full.
    pub fn bind(&mut self, channel: DigitalChannel, output: Output<'a>) -> Result<(), Output<'a>> {
        self.outputs
            .push((channel, output))
            .map_err(|(_, output)| output)
    }
}

impl<'a, const N: usize> Default for RpGate<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> DigitalPort for RpGate<'a, N> {
    fn write(&mut self, channel: DigitalChannel, level: Level) {
        if let Some((_, output)) = self.outputs.iter_mut().find(|(id, _)| *id == channel) {
            match level {
                Level::High => output.set_high(),
                Level::Low => output.set_low(),
            }
        }
    }
}
