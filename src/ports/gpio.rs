//! Digital output port - abstraction for the divider power gate

/// Identifier of a digital output (the GPIO number on the target).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitalChannel(pub u8);

impl DigitalChannel {
    /// Create a channel identifier from a raw GPIO number.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw GPIO number.
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Output level of a digital channel.
///
/// The power gate is active high: `High` energizes the divider, `Low`
/// cuts its idle current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

/// Port for driving digital outputs.
pub trait DigitalPort {
    /// Set `channel` to `level`.
    fn write(&mut self, channel: DigitalChannel, level: Level);
}

/// Digital port for sensors without a power gate.
///
/// Satisfies the type parameter of an ungated [`TemperatureSensor`]
/// without bringing any hardware along; all writes are discarded.
///
/// [`TemperatureSensor`]: crate::sensor::TemperatureSensor
pub struct NoGate;

impl DigitalPort for NoGate {
    fn write(&mut self, _channel: DigitalChannel, _level: Level) {}
}
