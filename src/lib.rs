//! NTC Thermistor Sensing Library
//!
//! Converts a single ADC code from a pulldown-resistor + NTC thermistor
//! voltage divider into a temperature, using the Steinhart-Hart polynomial
//! approximation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - DividerModel: ADC code → thermistor resistance                │
//! │  - SteinhartCoefficients: resistance → Kelvin                    │
//! │  - Measurement entity                                            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - AnalogPort: one-shot ADC samples                              │
//! │  - DigitalPort: drive the divider power gate                     │
//! │  - ConsolePort: line-oriented diagnostic text                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - RpAdc: RP2350 blocking ADC                                    │
//! │  - RpGate: RP2350 GPIO outputs                                   │
//! │  - UartConsole: blocking UART transmitter                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`TemperatureSensor`] composes the three ports into the measurement
//! pipeline: gate on → sample → gate off → diagnostics → fault check →
//! Steinhart-Hart.
//!
//! # Fault signaling
//!
//! An ADC code of 0 is unreachable with the divider wired correctly, so
//! the pipeline treats it as a wiring fault and returns the negative
//! sentinel [`FAULT_KELVIN`](domain::measurement::FAULT_KELVIN) instead of
//! attempting resistance math. The sentinel flows arithmetically through
//! the Celsius/Fahrenheit conversions; callers check `kelvin < 0`, not the
//! converted range.
//!
//! # Feature flags
//!
//! - `rp2350`: embassy-rp adapters for RP2350-class targets
//! - `defmt`: `defmt::Format` derives on the public types
//! - `demos`: everything the on-target demo binaries need
//!
//! The default build is a dependency-light no_std core, so the domain and
//! the pipeline are testable on the host with fake ports.

#![cfg_attr(not(test), no_std)]

/// Domain layer - pure measurement math
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete hardware implementations
pub mod adapters;

/// Application service - the measurement pipeline
pub mod sensor;

// Re-export key domain types
pub use domain::{DividerModel, Measurement, SteinhartCoefficients, ADC_FULL_SCALE, FAULT_KELVIN};

// Re-export key port traits
pub use ports::{
    AnalogChannel, AnalogPort, ConsolePort, DigitalChannel, DigitalPort, Level, NoGate,
    NullConsole,
};

// Re-export the sensor
pub use sensor::{SensorConfig, TemperatureSensor};
