//! Adapters - concrete implementations of the ports
//!
//! Adapters connect the measurement pipeline to real hardware by
//! implementing the port traits. The RP2350 set is behind the `rp2350`
//! feature so the default build stays a host-testable no_std core.
//!
//! # Available Adapters
//!
//! - **rp_adc**: RP2350 blocking ADC with a table of bound channels
//! - **rp_gpio**: RP2350 GPIO outputs for the divider power gate
//! - **uart_console**: blocking UART transmitter as the diagnostics sink

#[cfg(feature = "rp2350")]
pub mod rp_adc;
#[cfg(feature = "rp2350")]
pub mod rp_gpio;
#[cfg(feature = "rp2350")]
pub mod uart_console;

#[cfg(feature = "rp2350")]
pub use rp_adc::RpAdc;
#[cfg(feature = "rp2350")]
pub use rp_gpio::RpGate;
#[cfg(feature = "rp2350")]
pub use uart_console::UartConsole;
