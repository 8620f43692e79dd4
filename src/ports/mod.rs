//! Ports (interfaces) defining the boundaries of the sensor core
//!
//! Ports are traits that define how the measurement pipeline touches the
//! outside world. They keep the core host-agnostic: on target they are
//! implemented by the hardware adapters, on the host by fakes.
//!
//! - **AnalogPort**: where ADC codes come from
//! - **DigitalPort**: how the divider power gate is driven
//! - **ConsolePort**: where diagnostic text goes

pub mod adc;
pub mod console;
pub mod gpio;

pub use adc::{AnalogChannel, AnalogPort};
pub use console::{ConsolePort, NullConsole};
pub use gpio::{DigitalChannel, DigitalPort, Level, NoGate};
