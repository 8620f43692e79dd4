//! Domain layer - pure measurement math independent of hardware
//!
//! This module contains the divider model, the Steinhart-Hart evaluator,
//! and the measurement entity. Nothing here touches a port or a
//! peripheral, so it all runs (and is tested) on the host.

pub mod divider;
pub mod measurement;
pub mod steinhart;

pub use divider::{DividerModel, ADC_FULL_SCALE};
pub use measurement::{Measurement, FAULT_KELVIN};
pub use steinhart::{kelvin_to_celsius, kelvin_to_fahrenheit, SteinhartCoefficients};
